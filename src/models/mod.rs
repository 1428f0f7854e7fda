// Models module for data structures
pub mod version;
