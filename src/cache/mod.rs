pub mod rosters;

pub use rosters::RosterCache;
