use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::settings::DataSettings;
use crate::domain::TeamRoster;
use crate::errors::{AppError, AppResult};
use crate::sheets::{find_roster, load_rosters};

struct CachedWorkbook {
    rosters: Arc<Vec<TeamRoster>>,
    loaded_at: Instant,
}

/// Read-mostly cache of the parsed team workbook.
///
/// Entries are replaced wholesale on refresh or once they outlive the TTL;
/// readers hold an `Arc` to the snapshot they saw.
pub struct RosterCache {
    workbook_path: PathBuf,
    home_nationality: String,
    ttl: Duration,
    inner: RwLock<Option<CachedWorkbook>>,
}

impl RosterCache {
    pub fn new(settings: &DataSettings) -> Self {
        Self {
            workbook_path: settings.workbook_path.clone(),
            home_nationality: settings.home_nationality.clone(),
            ttl: settings.cache_ttl,
            inner: RwLock::new(None),
        }
    }

    pub async fn rosters(&self) -> AppResult<Arc<Vec<TeamRoster>>> {
        {
            let guard = self.inner.read().await;
            if let Some(cached) = guard.as_ref().filter(|c| c.loaded_at.elapsed() < self.ttl) {
                return Ok(Arc::clone(&cached.rosters));
            }
        }

        let mut guard = self.inner.write().await;
        // Another request may have reloaded while we waited for the write lock
        if let Some(cached) = guard.as_ref().filter(|c| c.loaded_at.elapsed() < self.ttl) {
            return Ok(Arc::clone(&cached.rosters));
        }

        let rosters = Arc::new(self.load().await?);
        *guard = Some(CachedWorkbook {
            rosters: Arc::clone(&rosters),
            loaded_at: Instant::now(),
        });
        Ok(rosters)
    }

    pub async fn roster(&self, short_name: &str) -> AppResult<TeamRoster> {
        let rosters = self.rosters().await?;
        find_roster(&rosters, short_name).cloned()
    }

    /// Reload from disk; the previous snapshot stays in place if loading fails
    pub async fn refresh(&self) -> AppResult<usize> {
        let rosters = self.load().await?;
        let count = rosters.len();

        let mut guard = self.inner.write().await;
        *guard = Some(CachedWorkbook {
            rosters: Arc::new(rosters),
            loaded_at: Instant::now(),
        });
        info!("Roster cache refreshed with {} teams", count);
        Ok(count)
    }

    async fn load(&self) -> AppResult<Vec<TeamRoster>> {
        let path = self.workbook_path.clone();
        let home = self.home_nationality.clone();
        tokio::task::spawn_blocking(move || load_rosters(&path, &home))
            .await
            .map_err(|e| AppError::unavailable("workbook loader", e))?
    }
}
