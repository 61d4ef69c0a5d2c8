pub mod comparator;
pub mod config;
pub mod credentials;
pub mod fs;
pub mod generate;
pub mod json;
pub mod json_ext;
pub mod llm;
pub mod report;
pub mod types;
