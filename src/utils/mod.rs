/// Module containing environment variable helpers
pub mod config;
/// Module containing request correlation id helpers
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use logger::*;
