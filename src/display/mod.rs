//! Display formatting for terminal output
//!
//! Formatting helpers return `String`s; printing is left to the CLI.

pub mod expense;
pub mod recurring;

pub use expense::{format_expense_details, format_expense_list};
pub use recurring::{format_due_list, format_recurring_details, format_recurring_list};

/// Shorten `s` to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
