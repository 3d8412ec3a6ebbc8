use log::debug;
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::{PlayerRecord, Role};

/// Spreadsheet cell after decoding, independent of the file format
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

/// One sheet row keyed by header text; empty cells are left out
pub type RawRow = HashMap<String, Cell>;

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.trim().to_string(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Bool(b) => *b,
            Cell::Number(n) => *n != 0.0,
            Cell::Text(text) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "y" | "yes" | "true" | "x" | "c" | "wk" | "1"
            ),
            Cell::Empty => false,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Empty => Value::Null,
            Cell::Text(text) => Value::String(text.clone()),
            Cell::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Bool(b) => Value::Bool(*b),
        }
    }
}

/// Where a row came from
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// Sheet name, used as the team fallback and id prefix
    pub sheet: &'a str,
    /// Zero-based data row index
    pub index: usize,
    pub home_nationality: &'a str,
}

mod columns {
    pub const PLAYER: &[&str] = &["Player", "Name"];
    pub const SPAN: &[&str] = &["Span"];
    pub const POSITION: &[&str] = &["Position"];
    pub const TYPE: &[&str] = &["Type"];
    pub const CONSISTENCY: &[&str] = &["Consistency", "Consistency_AHP", "Consistency_PCA"];
    pub const FORM: &[&str] = &["Form", "Form_AHP", "Form_PCA"];
    pub const TEAM: &[&str] = &["Team"];
    pub const NATIONALITY: &[&str] = &["Nationality"];
    pub const BOWLER_TYPE: &[&str] = &["Bowler_Type", "Bowler Type"];
    pub const AR_TYPE: &[&str] = &["AR Type", "AR_Type"];
    pub const CAPTAIN: &[&str] = &["Captain", "Is_Captain"];
    pub const KEEPER: &[&str] = &["Keeper", "Is_Keeper"];
    pub const BATTING_AVG: &[&str] = &["Batting_Avg", "Batting Avg"];
    pub const STRIKE_RATE: &[&str] = &["Strike_Rate", "Strike Rate"];
    pub const BOWLING_AVG: &[&str] = &["Bowling_Avg", "Bowling Avg"];
    pub const ECONOMY: &[&str] = &["Economy", "Economy_Rate", "Econ"];
    pub const MATCHES: &[&str] = &["Matches", "Mat"];
}

fn field<'r>(row: &'r RawRow, aliases: &[&str]) -> Option<&'r Cell> {
    aliases.iter().find_map(|alias| {
        row.iter()
            .find(|(header, cell)| header.trim().eq_ignore_ascii_case(alias) && !cell.is_empty())
            .map(|(_, cell)| cell)
    })
}

fn text(row: &RawRow, aliases: &[&str]) -> String {
    field(row, aliases).map(Cell::as_text).unwrap_or_default()
}

fn optional_text(row: &RawRow, aliases: &[&str]) -> Option<String> {
    field(row, aliases).map(Cell::as_text)
}

fn number(row: &RawRow, aliases: &[&str]) -> Option<f64> {
    field(row, aliases).and_then(Cell::as_number)
}

fn flag(row: &RawRow, aliases: &[&str]) -> bool {
    field(row, aliases).is_some_and(Cell::is_truthy)
}

/// BAT, BOWL and AR map to their roles; every other code is treated as a keeper
pub fn role_from_type(code: &str) -> Role {
    match code.trim().to_ascii_uppercase().as_str() {
        "BAT" => Role::Batsman,
        "BOWL" => Role::Bowler,
        "AR" => Role::Allrounder,
        other => {
            if !other.contains("WK") {
                debug!("Unrecognised player type {:?}, treating as Wicketkeeper", other);
            }
            Role::Wicketkeeper
        }
    }
}

/// Anyone with a recorded nationality other than the home one
pub fn is_overseas(nationality: &str, home_nationality: &str) -> bool {
    let nationality = nationality.trim();
    !nationality.is_empty() && !nationality.eq_ignore_ascii_case(home_nationality.trim())
}

/// Turn a raw sheet row into a typed record, defaulting whatever is missing
pub fn normalize_row(row: &RawRow, ctx: &RowContext) -> PlayerRecord {
    let nationality = text(row, columns::NATIONALITY);
    let team = optional_text(row, columns::TEAM).unwrap_or_else(|| ctx.sheet.to_string());

    PlayerRecord {
        id: format!("{}-{}", ctx.sheet.trim().to_lowercase(), ctx.index + 1),
        name: text(row, columns::PLAYER),
        role: role_from_type(&text(row, columns::TYPE)),
        team,
        is_overseas_player: is_overseas(&nationality, ctx.home_nationality),
        nationality,
        is_captain: flag(row, columns::CAPTAIN),
        is_keeper: flag(row, columns::KEEPER),
        consistency: number(row, columns::CONSISTENCY).unwrap_or(0.0),
        form: number(row, columns::FORM).unwrap_or(0.0),
        batting_avg: number(row, columns::BATTING_AVG),
        strike_rate: number(row, columns::STRIKE_RATE),
        bowling_avg: number(row, columns::BOWLING_AVG),
        economy_rate: number(row, columns::ECONOMY),
        bowler_type: optional_text(row, columns::BOWLER_TYPE),
        matches: number(row, columns::MATCHES)
            .filter(|m| *m >= 0.0)
            .map(|m| m as u32),
        span: optional_text(row, columns::SPAN),
        position: number(row, columns::POSITION)
            .filter(|p| *p >= 0.0)
            .map(|p| p as u32),
        all_rounder_type: optional_text(row, columns::AR_TYPE),
    }
}
