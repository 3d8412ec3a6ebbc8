pub mod normalizer;
pub mod stats;
pub mod workbook;

pub use normalizer::{normalize_row, role_from_type, Cell, RawRow, RowContext};
pub use stats::{load_stats, parse_player_type, Season, StatsRow};
pub use workbook::{find_roster, load_rosters};
