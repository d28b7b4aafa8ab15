use serde::Serialize;

use marblezero::history::HistoryLog;
use marblezero::output::{format_timestamp, print_json};
use marblezero_engine::Event;

#[derive(Serialize)]
struct HistoryView<'a> {
    total: usize,
    skipped: usize,
    events: &'a [Event],
}

pub fn cmd_history(limit: usize, json: bool) -> anyhow::Result<i32> {
    let log = HistoryLog::open_default()?;
    let report = log.read_report()?;
    let start = report.events.len().saturating_sub(limit);
    let recent = &report.events[start..];

    if json {
        print_json(&HistoryView {
            total: report.events.len(),
            skipped: report.skipped,
            events: recent,
        });
        return Ok(0);
    }

    if report.skipped > 0 {
        eprintln!(
            "[marblezero] skipped {} malformed line(s) in {}",
            report.skipped,
            log.path().display()
        );
    }
    if recent.is_empty() {
        eprintln!("[marblezero] no commands recorded yet");
        return Ok(0);
    }
    for event in recent {
        println!("{}  {}", format_timestamp(&event.timestamp), describe(event));
    }
    Ok(0)
}

/// Compact one-line form of the structured fields, not the raw command line.
fn describe(event: &Event) -> String {
    let mut parts = vec![event.command.as_str()];
    parts.extend(event.subcommand.as_deref());
    parts.extend(event.flags.iter().map(String::as_str));
    let mut line = parts.join(" ");
    if !event.file_extensions.is_empty() {
        line.push_str("  [");
        line.push_str(&event.file_extensions.join(","));
        line.push(']');
    }
    line
}
