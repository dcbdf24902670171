//! Configuration management for hostel-ledger

pub mod paths;
pub mod settings;

pub use paths::HostelPaths;
pub use settings::Settings;
