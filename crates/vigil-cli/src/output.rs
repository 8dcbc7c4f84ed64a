//! Output formatting helpers.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use vigil_core::ListState;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a progress note on stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Color a wire status name by how it reads to an operator.
pub fn status(name: &str) -> ColoredString {
    match name {
        "approved" | "completed" | "resolved" | "accepted" => name.green(),
        "pending" | "open" | "in_progress" | "confirmed" => name.yellow(),
        "rejected" | "cancelled" | "critical" => name.red(),
        _ => name.normal(),
    }
}

/// Print the items of a fetched page, one line each, then a paging summary.
pub fn list<T>(state: &ListState<T>, empty: &str, line: impl Fn(&T) -> String) {
    if state.items.is_empty() {
        note(empty);
        return;
    }

    for item in &state.items {
        println!("{}", line(item));
    }

    if let Some(page) = state.pagination {
        eprintln!();
        let summary = format!(
            "Page {}/{} · {} total",
            page.current_page,
            page.last_page.max(1),
            state.total()
        );
        eprintln!("{}", summary.dimmed());
        if state.has_more() {
            eprintln!("{}", format!("Next: --page {}", page.current_page + 1).dimmed());
        }
    }
}
