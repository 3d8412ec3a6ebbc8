use super::weighting::Weights;
use crate::domain::{PlayerRecord, Role, ScoredPlayer};

/// Bowling average at which a bowler contributes nothing
pub const BOWLING_AVG_CEILING: f64 = 50.0;
/// Economy rate at which a bowler contributes nothing
pub const ECONOMY_CEILING: f64 = 12.0;

const STAT_SHARE: f64 = 0.6;

/// `avg * avg_weight + sr * (1 - avg_weight)`
pub(crate) fn batting_index(batting_avg: f64, strike_rate: f64, avg_weight: f64) -> f64 {
    batting_avg * avg_weight + strike_rate * (1.0 - avg_weight)
}

/// Inverted against fixed ceilings so lower average and economy score higher
pub(crate) fn bowling_index(bowling_avg: f64, economy_rate: f64) -> f64 {
    (BOWLING_AVG_CEILING - bowling_avg) * 0.6 + (ECONOMY_CEILING - economy_rate) * 0.4
}

fn batting_stats(player: &PlayerRecord) -> Option<(f64, f64)> {
    Some((player.batting_avg?, player.strike_rate?))
}

fn bowling_stats(player: &PlayerRecord) -> Option<(f64, f64)> {
    Some((player.bowling_avg?, player.economy_rate?))
}

/// Role-specific score from batting/bowling stats; 0 when the stats are absent
pub fn base_score(player: &PlayerRecord) -> f64 {
    match player.role {
        Role::Batsman => batting_stats(player)
            .map(|(avg, sr)| batting_index(avg, sr, 0.6))
            .unwrap_or(0.0),
        Role::Wicketkeeper => batting_stats(player)
            .map(|(avg, sr)| batting_index(avg, sr, 0.7))
            .unwrap_or(0.0),
        Role::Bowler => bowling_stats(player)
            .map(|(avg, econ)| bowling_index(avg, econ))
            .unwrap_or(0.0),
        Role::Allrounder => {
            let batting = batting_stats(player)
                .map(|(avg, sr)| batting_index(avg, sr, 0.6))
                .unwrap_or(0.0);
            let bowling = bowling_stats(player)
                .map(|(avg, econ)| bowling_index(avg, econ))
                .unwrap_or(0.0);
            batting * 0.5 + bowling * 0.5
        }
    }
}

/// Desirability of one player under the given weights.
///
/// Players without usable stats fall back to the plain consistency/form blend.
pub fn score(player: &PlayerRecord, weights: &Weights) -> f64 {
    let base = base_score(player);
    let blend = weights.blend(player.consistency, player.form);

    if base == 0.0 {
        return blend;
    }

    round_to_cents(base * STAT_SHARE + blend)
}

pub fn score_player(player: &PlayerRecord, weights: &Weights) -> ScoredPlayer {
    ScoredPlayer {
        player: player.clone(),
        score: score(player, weights),
    }
}

/// Score every player and sort best first; ties keep roster order
pub fn rank_players(players: &[PlayerRecord], weights: &Weights) -> Vec<ScoredPlayer> {
    let mut ranked: Vec<ScoredPlayer> = players.iter().map(|p| score_player(p, weights)).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
