use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing role, which decides the scoring formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    Allrounder,
    Wicketkeeper,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Batsman, Role::Bowler, Role::Allrounder, Role::Wicketkeeper];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::Allrounder => "Allrounder",
            Role::Wicketkeeper => "Wicketkeeper",
        }
    }

    /// Parse a role by its display name ("Batsman", "Bowler", ...)
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One player row after normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub team: String,
    pub nationality: String,
    pub is_overseas_player: bool,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_keeper: bool,
    #[serde(default)]
    pub consistency: f64,
    #[serde(default)]
    pub form: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting_avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowling_avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowler_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_rounder_type: Option<String>,
}

impl PlayerRecord {
    /// Bare record with only the fields every sheet carries
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            team: String::new(),
            nationality: String::new(),
            is_overseas_player: false,
            is_captain: false,
            is_keeper: false,
            consistency: 0.0,
            form: 0.0,
            batting_avg: None,
            strike_rate: None,
            bowling_avg: None,
            economy_rate: None,
            bowler_type: None,
            matches: None,
            span: None,
            position: None,
            all_rounder_type: None,
        }
    }
}

/// A player plus the score of the current scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    #[serde(flatten)]
    pub player: PlayerRecord,
    pub score: f64,
}

impl ScoredPlayer {
    pub fn id(&self) -> &str {
        &self.player.id
    }

    pub fn is_overseas(&self) -> bool {
        self.player.is_overseas_player
    }

    pub fn role(&self) -> Role {
        self.player.role
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub players: Vec<PlayerRecord>,
}

impl TeamRoster {
    fn has_player(&self, name: &str) -> bool {
        self.players
            .iter()
            .any(|p| p.name.trim().eq_ignore_ascii_case(name.trim()))
    }

    /// Requested names with no player on this roster
    pub fn unmatched_names<'n>(&self, names: &'n [String]) -> Vec<&'n str> {
        names
            .iter()
            .map(String::as_str)
            .filter(|name| !self.has_player(name))
            .collect()
    }

    /// Copy of the roster restricted to the named players, in roster order
    pub fn restricted_to(&self, names: &[String]) -> TeamRoster {
        let unmatched = self.unmatched_names(names);
        if !unmatched.is_empty() {
            warn!("{}: no players named {:?}", self.short_name, unmatched);
        }

        let players = self
            .players
            .iter()
            .filter(|p| names.iter().any(|n| n.trim().eq_ignore_ascii_case(p.name.trim())))
            .cloned()
            .collect();

        TeamRoster {
            players,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadResult {
    pub recommended_squad: Vec<ScoredPlayer>,
    pub remaining_players: Vec<ScoredPlayer>,
}

/// Role and nationality tallies of a group of players
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadComposition {
    pub batsmen: usize,
    pub bowlers: usize,
    pub allrounders: usize,
    pub wicketkeepers: usize,
    pub overseas: usize,
    pub home: usize,
}

impl SquadComposition {
    pub fn from_players<'a, I>(players: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayerRecord>,
    {
        let mut composition = SquadComposition::default();
        for player in players {
            match player.role {
                Role::Batsman => composition.batsmen += 1,
                Role::Bowler => composition.bowlers += 1,
                Role::Allrounder => composition.allrounders += 1,
                Role::Wicketkeeper => composition.wicketkeepers += 1,
            }
            if player.is_overseas_player {
                composition.overseas += 1;
            } else {
                composition.home += 1;
            }
        }
        composition
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedScore {
    pub runs: i64,
    pub wickets: u32,
}

/// Team strength scalars, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strengths {
    pub batting: i64,
    pub bowling: i64,
    pub form: i64,
    pub consistency: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPrediction {
    pub name: String,
    pub win_probability: i64,
    pub projected_score: ProjectedScore,
    pub strengths: Strengths,
    pub key_players: Vec<ScoredPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub team_a: TeamPrediction,
    pub team_b: TeamPrediction,
    pub winner: String,
    pub margin: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_counts_roles_and_nationality() {
        let mut overseas_bowler = PlayerRecord::new("1", "Rashid", Role::Bowler);
        overseas_bowler.is_overseas_player = true;
        let players = vec![
            PlayerRecord::new("2", "Kohli", Role::Batsman),
            overseas_bowler,
            PlayerRecord::new("3", "Pant", Role::Wicketkeeper),
        ];

        let composition = SquadComposition::from_players(&players);
        assert_eq!(composition.batsmen, 1);
        assert_eq!(composition.bowlers, 1);
        assert_eq!(composition.wicketkeepers, 1);
        assert_eq!(composition.overseas, 1);
        assert_eq!(composition.home, 2);
    }

    #[test]
    fn scored_player_serializes_flat_in_camel_case() {
        let mut record = PlayerRecord::new("csk-1", "Dhoni", Role::Wicketkeeper);
        record.is_captain = true;
        let scored = ScoredPlayer { player: record, score: 42.5 };

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "csk-1");
        assert_eq!(json["role"], "Wicketkeeper");
        assert_eq!(json["isCaptain"], true);
        assert_eq!(json["score"], 42.5);
        assert!(json.get("battingAvg").is_none());
    }

    #[test]
    fn restricted_roster_keeps_only_named_players() {
        let roster = TeamRoster {
            id: "MI".into(),
            name: "Mumbai Indians".into(),
            short_name: "MI".into(),
            players: vec![
                PlayerRecord::new("mi-1", "Rohit Sharma", Role::Batsman),
                PlayerRecord::new("mi-2", "Jasprit Bumrah", Role::Bowler),
            ],
        };

        let xi = roster.restricted_to(&["jasprit bumrah".to_string()]);
        assert_eq!(xi.players.len(), 1);
        assert_eq!(xi.players[0].id, "mi-2");
        assert_eq!(xi.short_name, "MI");
    }

    #[test]
    fn misspelled_names_are_reported_as_unmatched() {
        let roster = TeamRoster {
            id: "MI".into(),
            name: "Mumbai Indians".into(),
            short_name: "MI".into(),
            players: vec![
                PlayerRecord::new("mi-1", "Rohit Sharma", Role::Batsman),
                PlayerRecord::new("mi-2", "Jasprit Bumrah", Role::Bowler),
            ],
        };
        let names = vec![" ROHIT SHARMA ".to_string(), "Jasprit Bumra".to_string()];

        assert_eq!(roster.unmatched_names(&names), vec!["Jasprit Bumra"]);
        assert_eq!(roster.restricted_to(&names).players.len(), 1);
    }

    #[test]
    fn role_parses_display_names() {
        assert_eq!(Role::from_name("allrounder"), Some(Role::Allrounder));
        assert_eq!(Role::from_name("Umpire"), None);
    }
}
