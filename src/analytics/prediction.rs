use log::debug;
use rand::Rng;

use super::scorer::{batting_index, rank_players, BOWLING_AVG_CEILING, ECONOMY_CEILING};
use super::weighting::Weights;
use crate::config::settings::PredictionSettings;
use crate::domain::{
    PlayerRecord, PredictionResult, ProjectedScore, Role, Strengths, TeamPrediction, TeamRoster,
};
use crate::errors::{AppError, AppResult};

/// Share of a specialist's contribution credited to an allrounder
const ALLROUNDER_SHARE: f64 = 0.6;

/// Mean per-player strength scalars of one roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamStrength {
    pub batting: f64,
    pub bowling: f64,
    pub form: f64,
    pub consistency: f64,
    pub overall: f64,
}

impl TeamStrength {
    pub fn of(roster: &TeamRoster) -> AppResult<Self> {
        let players = &roster.players;
        if players.is_empty() {
            return Err(AppError::EmptyRoster(roster.name.clone()));
        }

        let count = players.len() as f64;
        let mean = |f: fn(&PlayerRecord) -> f64| players.iter().map(f).sum::<f64>() / count;

        let batting = mean(batting_contribution);
        let bowling = mean(bowling_contribution);
        let form = mean(|p| p.form);
        let consistency = mean(|p| p.consistency);

        Ok(Self {
            batting,
            bowling,
            form,
            consistency,
            overall: batting * 0.4 + bowling * 0.4 + form * 0.1 + consistency * 0.1,
        })
    }

    pub fn rounded(&self) -> Strengths {
        Strengths {
            batting: round_half_up(self.batting),
            bowling: round_half_up(self.bowling),
            form: round_half_up(self.form),
            consistency: round_half_up(self.consistency),
        }
    }
}

fn batting_contribution(player: &PlayerRecord) -> f64 {
    let index = batting_index(
        player.batting_avg.unwrap_or(0.0),
        player.strike_rate.unwrap_or(0.0),
        0.7,
    );
    match player.role {
        Role::Batsman | Role::Wicketkeeper => index,
        Role::Allrounder => index * ALLROUNDER_SHARE,
        Role::Bowler => 0.0,
    }
}

fn bowling_contribution(player: &PlayerRecord) -> f64 {
    // A zero or missing figure contributes nothing rather than the full ceiling
    let inverted_avg = match player.bowling_avg {
        Some(avg) if avg != 0.0 => BOWLING_AVG_CEILING - avg,
        _ => 0.0,
    };
    let inverted_econ = match player.economy_rate {
        Some(econ) if econ != 0.0 => ECONOMY_CEILING - econ,
        _ => 0.0,
    };
    let index = inverted_avg * 0.6 + inverted_econ * 0.4;
    match player.role {
        Role::Bowler => index,
        Role::Allrounder => index * ALLROUNDER_SHARE,
        Role::Batsman | Role::Wicketkeeper => 0.0,
    }
}

/// Heuristic head-to-head prediction.
///
/// Strengths and win probabilities depend only on the rosters; projected scores
/// draw from `rng`, so a seeded generator makes the whole result reproducible.
pub fn predict<R: Rng + ?Sized>(
    team_a: &TeamRoster,
    team_b: &TeamRoster,
    settings: &PredictionSettings,
    rng: &mut R,
) -> AppResult<PredictionResult> {
    let strength_a = TeamStrength::of(team_a)?;
    let strength_b = TeamStrength::of(team_b)?;

    // Negative overalls would push the probabilities outside 0..=1
    let total = strength_a.overall + strength_b.overall;
    if strength_a.overall < 0.0 || strength_b.overall < 0.0 || total <= 0.0 || !total.is_finite() {
        return Err(AppError::DegenerateStrength {
            team_a: team_a.name.clone(),
            team_b: team_b.name.clone(),
        });
    }

    let win_prob_a = strength_a.overall / total;
    let win_prob_b = 1.0 - win_prob_a;

    let score_a = project_score(strength_a.batting, strength_b.bowling, settings, rng);
    let score_b = project_score(strength_b.batting, strength_a.bowling, settings, rng);

    let winner = if score_a.runs > score_b.runs {
        &team_a.name
    } else if score_b.runs > score_a.runs {
        &team_b.name
    } else if win_prob_a > 0.5 {
        &team_a.name
    } else {
        &team_b.name
    };

    debug!(
        "{} vs {}: overall {:.2} / {:.2}, runs {} / {}",
        team_a.name, team_b.name, strength_a.overall, strength_b.overall, score_a.runs, score_b.runs
    );

    Ok(PredictionResult {
        team_a: team_prediction(team_a, &strength_a, win_prob_a, score_a, settings),
        team_b: team_prediction(team_b, &strength_b, win_prob_b, score_b, settings),
        winner: winner.clone(),
        margin: (score_a.runs - score_b.runs).abs(),
    })
}

fn project_score<R: Rng + ?Sized>(
    batting: f64,
    opponent_bowling: f64,
    settings: &PredictionSettings,
    rng: &mut R,
) -> ProjectedScore {
    let base = settings.base_score + rng.gen_range(0.0f64..1.0) * settings.score_jitter;
    let runs = base * (batting / settings.batting_divisor) * (1.0 - opponent_bowling / settings.bowling_divisor);
    let wickets = ((rng.gen_range(0.0f64..1.0) * 10.0).floor() as u32).min(settings.max_wickets);

    ProjectedScore {
        runs: round_half_up(runs),
        wickets,
    }
}

fn team_prediction(
    roster: &TeamRoster,
    strength: &TeamStrength,
    win_probability: f64,
    projected_score: ProjectedScore,
    settings: &PredictionSettings,
) -> TeamPrediction {
    let mut key_players = rank_players(&roster.players, &Weights::equal());
    key_players.truncate(settings.key_players);

    TeamPrediction {
        name: roster.name.clone(),
        win_probability: round_half_up(win_probability * 100.0),
        projected_score,
        strengths: strength.rounded(),
        key_players,
    }
}

/// Halves round towards positive infinity
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
