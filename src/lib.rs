// verbump - three-component version values
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::version::{compare, compare_versions, ConstructionError, Version, VersionComponents};
pub use services::version_file::{BumpOutcome, VersionFile};
pub use services::version_parser::ParseError;
pub use utils::error::BumpError;
