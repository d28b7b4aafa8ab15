use serde::{Deserialize, Serialize};

use crate::event::Event;

/// An atomic predicate over a single [`Event`].
///
/// Conditions are total: every well-formed event either matches or does not.
/// In catalogue TOML each variant is a one-key table, e.g.
/// `{ command = "go" }` or `{ hour_range = { min = 2, max = 5 } }`, and the
/// legacy checks are bare strings (`"legacy_force"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Exact program name.
    Command(String),
    /// Exact program name and subcommand.
    SubCommand { command: String, name: String },
    /// Exact flag token present in the event's tracked flags.
    Flag(String),
    /// Local hour of day within `min..=max`. An inverted range matches nothing.
    HourRange { min: u32, max: u32 },
    /// At least this many distinct file extensions.
    UniqueExtensionsAtLeast(usize),
    /// Every listed extension was touched, in any order or multiplicity.
    AllExtensions(Vec<String>),
    /// The command line contained `--force`.
    LegacyForce,
    /// The command line contained `-rf` or `-fr`.
    LegacyRmRf,
}

impl Condition {
    pub fn command(name: impl Into<String>) -> Self {
        Self::Command(name.into())
    }

    pub fn sub_command(command: impl Into<String>, name: impl Into<String>) -> Self {
        Self::SubCommand {
            command: command.into(),
            name: name.into(),
        }
    }

    pub fn flag(flag: impl Into<String>) -> Self {
        Self::Flag(flag.into())
    }

    pub const fn hour_range(min: u32, max: u32) -> Self {
        Self::HourRange { min, max }
    }

    pub const fn unique_extensions_at_least(min: usize) -> Self {
        Self::UniqueExtensionsAtLeast(min)
    }

    pub fn all_extensions<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AllExtensions(exts.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::Command(name) => event.command == *name,
            Self::SubCommand { command, name } => {
                event.command == *command && event.subcommand.as_deref() == Some(name.as_str())
            }
            Self::Flag(flag) => event.has_flag(flag),
            Self::HourRange { min, max } => {
                let hour = event.hour();
                *min <= hour && hour <= *max
            }
            Self::UniqueExtensionsAtLeast(min) => event.unique_extensions().len() >= *min,
            Self::AllExtensions(exts) => {
                let present = event.unique_extensions();
                exts.iter().all(|ext| present.contains(ext.as_str()))
            }
            Self::LegacyForce => event.legacy_force,
            Self::LegacyRmRf => event.legacy_rm_rf,
        }
    }
}
