/// IPL franchise metadata keyed by the sheet name used in the team workbook
#[derive(Debug, Clone)]
pub struct TeamConfig {
    pub short_name: &'static str,
    pub name: &'static str,
}

impl TeamConfig {
    pub const fn new(short_name: &'static str, name: &'static str) -> Self {
        Self { short_name, name }
    }
}

pub const TEAMS: &[TeamConfig] = &[
    TeamConfig::new("CSK", "Chennai Super Kings"),
    TeamConfig::new("MI", "Mumbai Indians"),
    TeamConfig::new("RCB", "Royal Challengers Bengaluru"),
    TeamConfig::new("KKR", "Kolkata Knight Riders"),
    TeamConfig::new("SRH", "Sunrisers Hyderabad"),
    TeamConfig::new("RR", "Rajasthan Royals"),
    TeamConfig::new("DC", "Delhi Capitals"),
    TeamConfig::new("PBKS", "Punjab Kings"),
    TeamConfig::new("GT", "Gujarat Titans"),
    TeamConfig::new("LSG", "Lucknow Super Giants"),
];

/// Full franchise name for a sheet, falling back to the sheet name itself
pub fn display_name(short_name: &str) -> String {
    TEAMS
        .iter()
        .find(|team| team.short_name.eq_ignore_ascii_case(short_name.trim()))
        .map(|team| team.name.to_string())
        .unwrap_or_else(|| short_name.to_string())
}
