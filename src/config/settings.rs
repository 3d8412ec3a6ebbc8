use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub workbook_path: PathBuf,
    pub stats_dir: PathBuf,
    /// Nationality that does not count against the overseas quota
    pub home_nationality: String,
    pub cache_ttl: Duration,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            workbook_path: PathBuf::from("data/ipl-teams.xlsx"),
            stats_dir: PathBuf::from("data/stats"),
            home_nationality: "Indian".to_string(),
            cache_ttl: Duration::from_secs(15 * 60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionSettings {
    pub squad_size: usize,
    pub max_overseas: usize,
    pub batsmen: usize,
    pub bowlers: usize,
    pub allrounders: usize,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            squad_size: 11,
            max_overseas: 4,
            batsmen: 4,
            bowlers: 4,
            allrounders: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PredictionSettings {
    pub base_score: f64,
    pub score_jitter: f64,
    pub batting_divisor: f64,
    pub bowling_divisor: f64,
    pub max_wickets: u32,
    pub key_players: usize,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            base_score: 140.0, // 140-180 before strength adjustment
            score_jitter: 40.0,
            batting_divisor: 30.0,
            bowling_divisor: 100.0,
            max_wickets: 10,
            key_players: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub predictor_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            predictor_url: "http://localhost:8001/predict".to_string(),
            user_agent: "CricSquad/0.1",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data: DataSettings,
    pub selection: SelectionSettings,
    pub prediction: PredictionSettings,
    pub upstream: UpstreamSettings,
    pub admin_token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::default(),
            selection: SelectionSettings::default(),
            prediction: PredictionSettings::default(),
            upstream: UpstreamSettings::default(),
            admin_token: "secret".to_string(),
        }
    }

    /// Defaults overlaid with `CRICSQUAD_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup("CRICSQUAD_WORKBOOK") {
            config.data.workbook_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("CRICSQUAD_STATS_DIR") {
            config.data.stats_dir = PathBuf::from(dir);
        }
        if let Some(ttl) = lookup("CRICSQUAD_CACHE_TTL_SECS").and_then(|v| v.parse().ok()) {
            config.data.cache_ttl = Duration::from_secs(ttl);
        }
        if let Some(url) = lookup("CRICSQUAD_PREDICTOR_URL") {
            config.upstream.predictor_url = url;
        }
        if let Some(token) = lookup("CRICSQUAD_ADMIN_TOKEN") {
            config.admin_token = token;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_ipl_playing_xi_rules() {
        let config = AppConfig::new();
        assert_eq!(config.selection.squad_size, 11);
        assert_eq!(config.selection.max_overseas, 4);
        assert_eq!(
            config.selection.batsmen + config.selection.bowlers + config.selection.allrounders,
            11
        );
        assert_eq!(config.prediction.key_players, 3);
    }

    #[test]
    fn env_values_override_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CRICSQUAD_WORKBOOK", "/tmp/teams.xlsx"),
            ("CRICSQUAD_CACHE_TTL_SECS", "5"),
            ("CRICSQUAD_ADMIN_TOKEN", "hunter2"),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.workbook_path, PathBuf::from("/tmp/teams.xlsx"));
        assert_eq!(config.data.cache_ttl, Duration::from_secs(5));
        assert_eq!(config.admin_token, "hunter2");
        assert_eq!(config.data.stats_dir, PathBuf::from("data/stats"));
    }

    #[test]
    fn unparsable_ttl_is_ignored() {
        let config = AppConfig::from_lookup(|key| {
            (key == "CRICSQUAD_CACHE_TTL_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.data.cache_ttl, DataSettings::default().cache_ttl);
    }
}
