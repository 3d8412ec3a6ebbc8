pub mod settings;
pub mod teams;
pub mod venues;

pub use settings::AppConfig;
pub use teams::display_name;
pub use venues::is_known_venue;
