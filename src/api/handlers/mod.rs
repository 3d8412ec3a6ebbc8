use crate::api::predictor_client::ScorePredictorClient;
use crate::cache::RosterCache;
use crate::config::settings::AppConfig;
use crate::services::analysis::AnalysisService;

pub mod admin;
pub mod prediction;
pub mod squad;
pub mod stats;
pub mod teams;

pub struct AppState {
    pub config: AppConfig,
    pub rosters: RosterCache,
    pub analysis: AnalysisService,
    pub predictor: ScorePredictorClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let predictor = ScorePredictorClient::new(&config.upstream)?;
        Ok(Self {
            rosters: RosterCache::new(&config.data),
            analysis: AnalysisService::new(config.clone()),
            predictor,
            config,
        })
    }
}
