pub mod config;
pub mod connectors;
pub mod monitoring;
pub mod report;
pub mod utils;
pub mod watch;

// Crate version exposed for runtime queries
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
