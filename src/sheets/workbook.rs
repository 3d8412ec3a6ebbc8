use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use log::{info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::normalizer::{normalize_row, Cell, RawRow, RowContext};
use crate::config::display_name;
use crate::domain::TeamRoster;
use crate::errors::{AppError, AppResult};

type Workbook = Sheets<BufReader<File>>;

fn open(path: &Path) -> AppResult<Workbook> {
    if !path.exists() {
        return Err(AppError::SourceUnavailable(format!(
            "workbook not found at {}",
            path.display()
        )));
    }
    open_workbook_auto(path).map_err(|e| AppError::unavailable(&path.display().to_string(), e))
}

pub(crate) fn cell_from(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => {
            warn!("Spreadsheet error cell: {:?}", e);
            Cell::Empty
        }
        other => Cell::Text(other.to_string()),
    }
}

/// Rows keyed by the header row, skipping blank lines
pub(crate) fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|c| cell_from(c).as_text()).collect(),
        None => return Vec::new(),
    };

    rows.map(|cells| {
        headers
            .iter()
            .zip(cells.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, data)| (header.clone(), cell_from(data)))
            .filter(|(_, cell)| !cell.is_empty())
            .collect::<RawRow>()
    })
    .filter(|row| !row.is_empty())
    .collect()
}

fn read_rows(workbook: &mut Workbook, sheet: &str) -> AppResult<Vec<RawRow>> {
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| AppError::unavailable(sheet, e))?;
    Ok(rows_from_range(&range))
}

fn roster_from_rows(sheet: &str, rows: &[RawRow], home_nationality: &str) -> TeamRoster {
    let players = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            normalize_row(
                row,
                &RowContext {
                    sheet,
                    index,
                    home_nationality,
                },
            )
        })
        .collect();

    TeamRoster {
        id: sheet.to_string(),
        name: display_name(sheet),
        short_name: sheet.to_string(),
        players,
    }
}

/// Every sheet of the team workbook as a roster, in sheet order
pub fn load_rosters(path: &Path, home_nationality: &str) -> AppResult<Vec<TeamRoster>> {
    let mut workbook = open(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let mut rosters = Vec::with_capacity(sheet_names.len());
    for sheet in &sheet_names {
        let rows = read_rows(&mut workbook, sheet)?;
        rosters.push(roster_from_rows(sheet, &rows, home_nationality));
    }

    info!("Loaded {} team sheets from {}", rosters.len(), path.display());
    Ok(rosters)
}

/// Rows of the first sheet, for single-table files such as the stats exports
pub fn load_first_sheet(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut workbook = open(path)?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::SourceUnavailable(format!("{} has no sheets", path.display())))?;
    read_rows(&mut workbook, &first)
}

/// Find a roster by sheet name, exact match first
pub fn find_roster<'a>(rosters: &'a [TeamRoster], short_name: &str) -> AppResult<&'a TeamRoster> {
    let wanted = short_name.trim();
    rosters
        .iter()
        .find(|r| r.short_name == wanted)
        .or_else(|| rosters.iter().find(|r| r.short_name.eq_ignore_ascii_case(wanted)))
        .ok_or_else(|| AppError::MissingSheet(wanted.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (3, 3));
        let header = ["Player", "Type", "Form", "Nationality"];
        for (col, h) in header.iter().enumerate() {
            range.set_value((0, col as u32), Data::String(h.to_string()));
        }
        range.set_value((1, 0), Data::String("Ruturaj Gaikwad".into()));
        range.set_value((1, 1), Data::String("BAT".into()));
        range.set_value((1, 2), Data::Float(71.0));
        range.set_value((1, 3), Data::String("Indian".into()));
        // row 2 left blank
        range.set_value((3, 0), Data::String("Devon Conway".into()));
        range.set_value((3, 1), Data::String("WK".into()));
        range.set_value((3, 2), Data::Int(64));
        range.set_value((3, 3), Data::String("New Zealander".into()));
        range
    }

    #[test]
    fn rows_skip_blank_lines_and_empty_cells() {
        let rows = rows_from_range(&sample_range());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("Form"), Some(&Cell::Number(64.0)));
    }

    #[test]
    fn roster_uses_sheet_metadata() {
        let rows = rows_from_range(&sample_range());
        let roster = roster_from_rows("CSK", &rows, "Indian");

        assert_eq!(roster.id, "CSK");
        assert_eq!(roster.name, "Chennai Super Kings");
        assert_eq!(roster.players.len(), 2);
        assert_eq!(roster.players[0].role, Role::Batsman);
        assert_eq!(roster.players[1].role, Role::Wicketkeeper);
        assert!(roster.players[1].is_overseas_player);
        assert_eq!(roster.players[1].id, "csk-2");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_rosters(Path::new("/nonexistent/teams.xlsx"), "Indian").unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable(_)));
    }

    #[test]
    fn roster_lookup_falls_back_to_case_insensitive() {
        let rows = rows_from_range(&sample_range());
        let rosters = vec![roster_from_rows("CSK", &rows, "Indian")];
        assert!(find_roster(&rosters, "csk").is_ok());
        assert!(matches!(find_roster(&rosters, "MI"), Err(AppError::MissingSheet(name)) if name == "MI"));
    }
}
