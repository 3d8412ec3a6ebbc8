use log::debug;

use super::scorer::rank_players;
use super::weighting::Weights;
use crate::config::settings::SelectionSettings;
use crate::domain::{PlayerRecord, Role, ScoredPlayer, SquadResult};

/// Build a recommended XI from a roster.
///
/// Captain and keeper are reserved first, then role quotas are filled greedily
/// from the ranked pool, then the lineup is topped up with the best players
/// left. The overseas cap holds at every step.
pub fn select_squad(
    players: &[PlayerRecord],
    weights: &Weights,
    rules: &SelectionSettings,
) -> SquadResult {
    let ranked = rank_players(players, weights);
    let mut picker = SquadPicker::new(&ranked, rules.max_overseas);

    let captain = ranked.iter().position(|p| p.player.is_captain);
    let keeper = ranked.iter().position(|p| p.player.is_keeper);
    picker.captain = captain.map(|idx| picker.reserve(idx));
    picker.keeper = keeper
        .filter(|&idx| Some(idx) != captain)
        .map(|idx| picker.reserve(idx));

    picker.batsmen = picker.take_role(Role::Batsman, rules.batsmen);
    picker.bowlers = picker.take_role(Role::Bowler, rules.bowlers);
    picker.allrounders = picker.take_role(Role::Allrounder, rules.allrounders);

    if keeper.is_none() {
        picker.keeper = picker.take_best_wicketkeeper();
    }

    let mut lineup = picker.lineup();
    if lineup.len() > rules.squad_size {
        for idx in lineup.split_off(rules.squad_size) {
            picker.release(idx);
        }
    }
    picker.fill(&mut lineup, rules.squad_size);

    debug!(
        "Selected {} of {} players ({} overseas)",
        lineup.len(),
        ranked.len(),
        picker.overseas
    );

    let remaining_players = (0..ranked.len())
        .filter(|&idx| !picker.selected[idx])
        .map(|idx| ranked[idx].clone())
        .collect();
    let recommended_squad = lineup.into_iter().map(|idx| ranked[idx].clone()).collect();

    SquadResult {
        recommended_squad,
        remaining_players,
    }
}

/// Index bookkeeping over the ranked pool
struct SquadPicker<'a> {
    ranked: &'a [ScoredPlayer],
    selected: Vec<bool>,
    overseas: usize,
    max_overseas: usize,
    captain: Option<usize>,
    keeper: Option<usize>,
    batsmen: Vec<usize>,
    bowlers: Vec<usize>,
    allrounders: Vec<usize>,
}

impl<'a> SquadPicker<'a> {
    fn new(ranked: &'a [ScoredPlayer], max_overseas: usize) -> Self {
        Self {
            ranked,
            selected: vec![false; ranked.len()],
            overseas: 0,
            max_overseas,
            captain: None,
            keeper: None,
            batsmen: Vec::new(),
            bowlers: Vec::new(),
            allrounders: Vec::new(),
        }
    }

    /// Unconditional pick, still counted against the quota
    fn reserve(&mut self, idx: usize) -> usize {
        self.mark(idx);
        idx
    }

    fn fits_quota(&self, idx: usize) -> bool {
        !self.ranked[idx].is_overseas() || self.overseas < self.max_overseas
    }

    fn mark(&mut self, idx: usize) {
        self.selected[idx] = true;
        if self.ranked[idx].is_overseas() {
            self.overseas += 1;
        }
    }

    fn release(&mut self, idx: usize) {
        self.selected[idx] = false;
        if self.ranked[idx].is_overseas() {
            self.overseas -= 1;
        }
    }

    /// Consider the top `quota` free players of `role`; overseas ones that
    /// would break the cap are dropped rather than replaced
    fn take_role(&mut self, role: Role, quota: usize) -> Vec<usize> {
        let candidates: Vec<usize> = (0..self.ranked.len())
            .filter(|&idx| !self.selected[idx] && self.ranked[idx].role() == role)
            .take(quota)
            .collect();

        let mut taken = Vec::with_capacity(candidates.len());
        for idx in candidates {
            if !self.fits_quota(idx) {
                debug!("Skipping {} ({}): overseas cap reached", self.ranked[idx].player.name, role);
                continue;
            }
            self.mark(idx);
            taken.push(idx);
        }
        taken
    }

    fn take_best_wicketkeeper(&mut self) -> Option<usize> {
        let idx = (0..self.ranked.len()).find(|&idx| {
            !self.selected[idx]
                && self.ranked[idx].role() == Role::Wicketkeeper
                && self.fits_quota(idx)
        })?;
        self.mark(idx);
        Some(idx)
    }

    /// Captain, keeper, batsmen, bowlers, allrounders
    fn lineup(&self) -> Vec<usize> {
        self.captain
            .into_iter()
            .chain(self.keeper)
            .chain(self.batsmen.iter().copied())
            .chain(self.bowlers.iter().copied())
            .chain(self.allrounders.iter().copied())
            .collect()
    }

    fn fill(&mut self, lineup: &mut Vec<usize>, squad_size: usize) {
        for idx in 0..self.ranked.len() {
            if lineup.len() >= squad_size {
                break;
            }
            if self.selected[idx] || !self.fits_quota(idx) {
                continue;
            }
            self.mark(idx);
            lineup.push(idx);
        }
    }
}
