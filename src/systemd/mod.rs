// Systemd service health check module

pub mod check;
pub mod listing;
pub mod models;


pub use check::{aggregate, classify, run};
pub use listing::{ListingCommand, UnitSource};
pub use models::{Problem, UnitRecord};
