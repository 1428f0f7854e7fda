// Services module for parsing and version file handling
pub mod version_file;
pub mod version_parser;
