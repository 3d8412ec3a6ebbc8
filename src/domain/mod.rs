pub mod models;

pub use models::{
    PlayerRecord, PredictionResult, ProjectedScore, Role, ScoredPlayer, SquadComposition,
    SquadResult, Strengths, TeamPrediction, TeamRoster,
};
