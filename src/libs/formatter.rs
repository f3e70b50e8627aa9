//! Display formatting helpers for task fields.
//!
//! Table views and detail views share these so a due date or a status
//! always reads the same everywhere.

use chrono::NaiveDate;

/// Formats a due date for display, e.g. "10 January".
pub fn format_due_date(date: &NaiveDate) -> String {
    date.format("%d %B").to_string()
}

/// Formats completion status as a short word.
pub fn format_status(completed: bool) -> String {
    if completed { "done" } else { "pending" }.to_string()
}
