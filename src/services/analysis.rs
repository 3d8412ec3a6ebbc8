use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analytics::{predict, rank_players, select_squad, Weights};
use crate::api::models::{GenerateSquadResponse, GeneratedSquad, RankedRoster};
use crate::config::settings::AppConfig;
use crate::domain::{PredictionResult, SquadComposition, TeamRoster};
use crate::errors::AppResult;

/// Squad building and match prediction over already-loaded rosters
#[derive(Debug, Clone)]
pub struct AnalysisService {
    config: AppConfig,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Recommended XI for a roster; a single squad is produced
    pub fn generate_squad(
        &self,
        roster: &TeamRoster,
        consistency_weight: f64,
        form_weight: f64,
    ) -> AppResult<GenerateSquadResponse> {
        let weights = Weights::new(consistency_weight, form_weight)?;
        let result = select_squad(&roster.players, &weights, &self.config.selection);

        let total: f64 = result.recommended_squad.iter().map(|p| p.score).sum();
        let stats =
            SquadComposition::from_players(result.recommended_squad.iter().map(|p| &p.player));

        info!(
            "Generated squad of {} for {} ({} overseas)",
            result.recommended_squad.len(),
            roster.short_name,
            stats.overseas
        );

        Ok(GenerateSquadResponse {
            squads: vec![GeneratedSquad {
                id: 1,
                score: round_to(total, 4),
                players: result.recommended_squad,
                remaining_players: result.remaining_players,
                stats,
            }],
        })
    }

    /// Whole roster scored and sorted best first
    pub fn rank_roster(
        &self,
        roster: &TeamRoster,
        consistency_weight: f64,
        form_weight: f64,
    ) -> AppResult<RankedRoster> {
        let weights = Weights::new(consistency_weight, form_weight)?;
        Ok(RankedRoster {
            team_name: roster.name.clone(),
            players: rank_players(&roster.players, &weights),
            composition: SquadComposition::from_players(&roster.players),
        })
    }

    /// Head-to-head prediction; `seed` pins the score jitter
    pub fn predict_match(
        &self,
        team_a: &TeamRoster,
        team_b: &TeamRoster,
        seed: Option<u64>,
    ) -> AppResult<PredictionResult> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let result = predict(team_a, team_b, &self.config.prediction, &mut rng)?;
        info!(
            "Predicted {} vs {}: {} by {} runs",
            team_a.short_name, team_b.short_name, result.winner, result.margin
        );
        Ok(result)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlayerRecord, Role};

    fn player(id: &str, role: Role, consistency: f64, form: f64) -> PlayerRecord {
        let mut p = PlayerRecord::new(id, id, role);
        p.consistency = consistency;
        p.form = form;
        p.batting_avg = Some(30.0);
        p.strike_rate = Some(130.0);
        p.bowling_avg = Some(25.0);
        p.economy_rate = Some(8.0);
        p
    }

    fn roster(short: &str) -> TeamRoster {
        let mut players = Vec::new();
        for i in 0..6 {
            players.push(player(&format!("{short}-bat{i}"), Role::Batsman, 60.0 + i as f64, 50.0));
            players.push(player(&format!("{short}-bowl{i}"), Role::Bowler, 55.0, 65.0 - i as f64));
        }
        players.push(player(&format!("{short}-wk"), Role::Wicketkeeper, 50.0, 50.0));
        for i in 0..3 {
            players.push(player(&format!("{short}-ar{i}"), Role::Allrounder, 58.0, 58.0));
        }
        TeamRoster {
            id: short.to_lowercase(),
            name: short.to_string(),
            short_name: short.to_string(),
            players,
        }
    }

    #[test]
    fn generated_squad_totals_player_scores() {
        let service = AnalysisService::new(AppConfig::new());
        let response = service.generate_squad(&roster("CSK"), 0.3, 0.7).unwrap();

        assert_eq!(response.squads.len(), 1);
        let squad = &response.squads[0];
        assert_eq!(squad.players.len(), 11);
        assert_eq!(squad.players.len() + squad.remaining_players.len(), 16);

        let expected: f64 = squad.players.iter().map(|p| p.score).sum();
        assert!((squad.score - expected).abs() < 1e-4);
        assert_eq!(squad.stats.home, 11);
    }

    #[test]
    fn zero_weights_are_rejected() {
        let service = AnalysisService::new(AppConfig::new());
        assert!(service.generate_squad(&roster("MI"), 0.0, 0.0).is_err());
        assert!(service.rank_roster(&roster("MI"), 0.0, 0.0).is_err());
    }

    #[test]
    fn ranked_roster_keeps_every_player() {
        let service = AnalysisService::new(AppConfig::new());
        let ranked = service.rank_roster(&roster("RR"), 50.0, 50.0).unwrap();
        assert_eq!(ranked.players.len(), 16);
        assert!(ranked.players.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked.composition.wicketkeepers, 1);
    }

    #[test]
    fn seeded_match_prediction_repeats() {
        let service = AnalysisService::new(AppConfig::new());
        let (a, b) = (roster("CSK"), roster("MI"));
        let first = service.predict_match(&a, &b, Some(7)).unwrap();
        let second = service.predict_match(&a, &b, Some(7)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.team_a.win_probability + first.team_b.win_probability, 100);
    }
}
