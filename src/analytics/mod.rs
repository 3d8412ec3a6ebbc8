pub mod prediction;
pub mod scorer;
pub mod selection;
pub mod weighting;

pub use prediction::{predict, TeamStrength};
pub use scorer::{rank_players, score, score_player};
pub use selection::select_squad;
pub use weighting::Weights;
