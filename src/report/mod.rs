//! Console rendering for session listings.

use chrono::NaiveDateTime;
use prettytable::{format, row, Table};

use crate::monitoring::{active_sessions, SessionMetric};

/// Human-readable elapsed time: `45s` below a minute, `3m 25s` above.
pub fn format_duration(secs: i64) -> String {
    if secs < 60 {
        return format!("{secs}s");
    }
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Build the session table. `now` is injected so durations are testable.
pub fn render_sessions_table(sessions: &[&SessionMetric], now: NaiveDateTime) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![
        "#",
        "Session",
        "Bus",
        "Direction",
        "Connected",
        "Duration"
    ]);

    for (index, session) in sessions.iter().enumerate() {
        table.add_row(row![
            index + 1,
            session.short_id(),
            session.bus_number,
            session.direction,
            session.connected_at.format("%H:%M:%S"),
            format_duration(session.connected_duration(now)),
        ]);
    }

    table
}

/// Print the active-session headline and table for one poll.
pub fn print_active_sessions(sessions: &[SessionMetric]) {
    let active = active_sessions(sessions);
    println!("\nActive WebSocket sessions: {}", active.len());

    if active.is_empty() {
        println!("No active WebSocket sessions");
        return;
    }

    let now = chrono::Local::now().naive_local();
    render_sessions_table(&active, now).printstd();
}
