//! Reports over recorded expenses
//!
//! - Category breakdown: totals and shares per category
//! - Daily spend: variable totals per date

pub mod categories;
pub mod daily;

pub use categories::{CategoryReport, CategoryTotal};
pub use daily::{DailySpend, DailySpendReport};
