use std::fs::OpenOptions;
use std::io::{BufRead as _, BufReader, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use marblezero_engine::Event;

/// Append-only log of [`Event`]s, one JSON object per line.
///
/// Every call opens and closes the file: ingestion runs as a fresh process per
/// shell command, so nothing is buffered between calls.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

/// Events read from the log, plus the number of lines that were skipped.
#[derive(Debug, Default)]
pub struct ReadReport {
    pub events: Vec<Event>,
    pub skipped: usize,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log at the default location (see [`crate::paths::history_path`]).
    ///
    /// # Errors
    /// Returns an error if no user directory can be determined.
    pub fn open_default() -> anyhow::Result<Self> {
        let path = crate::paths::history_path()
            .ok_or_else(|| anyhow::anyhow!("cannot determine history path"))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one newline-terminated record, creating the file and its parent
    /// directory on first use.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be created or written.
    pub fn append(&self, event: &Event) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create history dir {}", parent.display()))?;
        }

        let mut line = serde_json::to_string(event).context("serialize event")?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open history {}", self.path.display()))?;
        // One write call per record keeps concurrent appends line-atomic.
        file.write_all(line.as_bytes())
            .with_context(|| format!("write history {}", self.path.display()))?;
        tracing::debug!(command = %event.command, path = %self.path.display(), "event appended");
        Ok(())
    }

    /// All readable events in append order. A missing log is an empty history.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn read_all(&self) -> anyhow::Result<Vec<Event>> {
        Ok(self.read_report()?.events)
    }

    /// Like [`Self::read_all`], also counting corrupt lines.
    ///
    /// A line that does not deserialize (for example a record cut short by a
    /// crash mid-write) is logged and skipped; it never hides the records
    /// around it. Blank lines are ignored without counting.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn read_report(&self) -> anyhow::Result<ReadReport> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history yet");
                return Ok(ReadReport::default());
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("open history {}", self.path.display())));
            }
        };

        let mut report = ReadReport::default();
        for (idx, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line = line.with_context(|| format!("read history {}", self.path.display()))?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            match serde_json::from_slice::<Event>(&line) {
                Ok(event) => report.events.push(event),
                Err(e) => {
                    report.skipped += 1;
                    tracing::warn!(line = idx + 1, error = %e, "skipping malformed history record");
                }
            }
        }
        Ok(report)
    }
}
