/// Print a Serialize value as pretty JSON, logging errors to stderr.
pub fn print_json(value: &(impl serde::Serialize + ?Sized)) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("[marblezero] JSON serialization error: {e}"),
    }
}

/// Local wall-clock rendering used by every text listing.
pub fn format_timestamp(ts: &marblezero_engine::Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
