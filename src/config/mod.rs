//! Configuration module for the cashflow scanner
//!
//! - Platform-aware path resolution with an environment override
//! - User settings persistence, including the analytics policy

pub mod paths;
pub mod settings;

pub use paths::CashflowPaths;
pub use settings::Settings;
