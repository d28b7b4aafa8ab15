//! Turn one raw command line into a stored history event.

use anyhow::Context as _;
use marblezero_engine::{Event, Timestamp, parse};

use crate::history::HistoryLog;

/// Parse `raw` as observed at `now` and append it to `log`.
///
/// # Errors
///
/// Returns an error if the command line is empty or the log cannot be written.
/// Nothing is appended on a parse failure.
pub fn ingest(log: &HistoryLog, raw: &str, now: Timestamp) -> anyhow::Result<Event> {
    let event = parse(raw, now).context("cannot record command")?;
    log.append(&event)?;
    tracing::info!(command = %event.command, "command recorded");
    Ok(event)
}

/// Current local time with its UTC offset, so the hour stays the user's hour.
pub fn now() -> Timestamp {
    chrono::Local::now().fixed_offset()
}
