use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::normalizer::{normalize_row, RawRow, RowContext};
use super::workbook::load_first_sheet;
use crate::domain::{PlayerRecord, Role};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Overall,
    LastSeason,
}

impl Season {
    pub fn parse(value: &str) -> AppResult<Season> {
        match value.trim().to_ascii_lowercase().as_str() {
            "overall" => Ok(Season::Overall),
            "lastseason" => Ok(Season::LastSeason),
            _ => Err(AppError::InvalidRequest(format!("Invalid season: {}", value))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Overall => "overall",
            Season::LastSeason => "lastseason",
        }
    }
}

pub fn parse_player_type(value: &str) -> AppResult<Role> {
    Role::from_name(value)
        .ok_or_else(|| AppError::InvalidRequest(format!("Invalid player type: {}", value)))
}

/// e.g. `batsman_overall.xlsx`
pub fn stats_file_name(role: Role, season: Season) -> String {
    format!("{}_{}.xlsx", role.as_str().to_lowercase(), season.as_str())
}

pub fn stats_file_path(dir: &Path, role: Role, season: Season) -> PathBuf {
    dir.join(stats_file_name(role, season))
}

/// A stats-file row: the normalized record plus every sheet column
#[derive(Debug, Clone, Serialize)]
pub struct StatsRow {
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub columns: Map<String, Value>,
}

pub(crate) fn stats_rows(rows: &[RawRow], role: Role, home_nationality: &str) -> Vec<StatsRow> {
    let prefix = role.as_str().to_lowercase();
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let mut record = normalize_row(
                row,
                &RowContext {
                    sheet: &prefix,
                    index,
                    home_nationality,
                },
            );
            record.role = role;
            if !row.keys().any(|k| k.trim().eq_ignore_ascii_case("team")) {
                record.team.clear();
            }

            let columns = row
                .iter()
                .map(|(header, cell)| (header.clone(), cell.to_json()))
                .collect();
            StatsRow { record, columns }
        })
        .collect()
}

/// Case-insensitive substring match on the player name
pub fn filter_by_name(rows: Vec<StatsRow>, query: Option<&str>) -> Vec<StatsRow> {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => {
            let needle = q.to_lowercase();
            rows.into_iter()
                .filter(|row| row.record.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => rows,
    }
}

/// Load one stats export for a role and season
pub fn load_stats(
    dir: &Path,
    role: Role,
    season: Season,
    home_nationality: &str,
) -> AppResult<Vec<StatsRow>> {
    let path = stats_file_path(dir, role, season);
    if !path.exists() {
        return Err(AppError::SourceUnavailable(format!(
            "Stats file not found: {}",
            stats_file_name(role, season)
        )));
    }
    let rows = load_first_sheet(&path)?;
    Ok(stats_rows(&rows, role, home_nationality))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::normalizer::Cell;

    fn raw(name: &str, runs: f64) -> RawRow {
        RawRow::from([
            ("Player".to_string(), Cell::Text(name.to_string())),
            ("Runs".to_string(), Cell::Number(runs)),
        ])
    }

    #[test]
    fn file_names_follow_type_and_season() {
        assert_eq!(stats_file_name(Role::Batsman, Season::Overall), "batsman_overall.xlsx");
        assert_eq!(
            stats_file_name(Role::Wicketkeeper, Season::LastSeason),
            "wicketkeeper_lastseason.xlsx"
        );
    }

    #[test]
    fn invalid_type_or_season_is_rejected() {
        assert!(matches!(parse_player_type("Umpire"), Err(AppError::InvalidRequest(_))));
        assert!(matches!(Season::parse("2008"), Err(AppError::InvalidRequest(_))));
        assert_eq!(Season::parse("LastSeason").unwrap(), Season::LastSeason);
    }

    #[test]
    fn rows_take_the_requested_role_and_keep_columns() {
        let rows = stats_rows(&[raw("Virat Kohli", 8004.0)], Role::Batsman, "Indian");
        assert_eq!(rows[0].record.role, Role::Batsman);
        assert_eq!(rows[0].record.id, "batsman-1");
        assert_eq!(rows[0].record.team, "");
        assert_eq!(rows[0].columns["Runs"], serde_json::json!(8004.0));
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let rows = stats_rows(
            &[raw("Virat Kohli", 1.0), raw("Shubman Gill", 2.0)],
            Role::Batsman,
            "Indian",
        );
        let found = filter_by_name(rows, Some("KOHLI"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.name, "Virat Kohli");
    }

    #[test]
    fn missing_stats_file_is_unavailable() {
        let err = load_stats(Path::new("/nonexistent"), Role::Bowler, Season::Overall, "Indian").unwrap_err();
        assert!(err.to_string().contains("bowler_overall.xlsx"));
    }
}
