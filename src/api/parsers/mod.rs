pub mod prediction;

pub use prediction::parse_score_prediction;
