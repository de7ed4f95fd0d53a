pub mod analyze;
pub mod config;
pub mod error;
pub mod inputs;
pub mod publish;
pub mod report;
pub mod types;
