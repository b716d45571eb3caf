//! Cashflow Scanner - terminal-based cashflow stress scanner
//!
//! This library tracks income and expense records and answers one question:
//! how many days will the safe balance last at the current pace of
//! discretionary spending, and how stressed is the cashflow?
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (incomes, expenses, money, IDs)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer and input validation
//! - `analytics`: Pure engine for balance, burn rate, runway and stress
//! - `audit`: Audit logging system
//! - `reports`: Category and daily spending reports
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow_scanner::config::{CashflowPaths, Settings};
//!
//! let paths = CashflowPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod analytics;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CashflowError, CashflowResult};
