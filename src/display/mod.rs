//! Display formatting for terminal output
//!
//! Record tables, the cashflow summary panel and the small formatting
//! helpers shared with reports.

pub mod format;
pub mod records;
pub mod summary;

pub use format::{format_bar, format_days, format_percentage, truncate};
pub use records::{
    format_expense_details, format_expense_table, format_income_details, format_income_table,
};
pub use summary::{format_summary, SummaryStyle};
