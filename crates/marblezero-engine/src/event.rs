use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

/// Wall-clock time of a command, keeping the UTC offset it was recorded in so
/// hour-of-day checks see the user's local hour.
pub type Timestamp = DateTime<FixedOffset>;

/// One executed shell command, normalized for rule evaluation.
///
/// Serialized as a single JSON object per history line. Field names follow the
/// `history_wal` format (`cmd`, `at`, `is_force`, ...) so older logs keep
/// loading. Unknown fields are ignored and missing optional fields default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Program name: the first whitespace-separated token.
    #[serde(rename = "cmd", deserialize_with = "non_blank")]
    pub command: String,

    #[serde(rename = "at")]
    pub timestamp: Timestamp,

    /// First non-flag argument, tracked only for multi-verb programs.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub subcommand: Option<String>,

    /// Tokens starting with `-`, tracked only for flag-sensitive programs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<String>,

    /// Extensions of every `name.ext` token, duplicates kept, in token order.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub file_extensions: Vec<String>,

    /// Raw command line contained `--force`. Superseded by `flags`.
    #[serde(rename = "is_force", default, skip_serializing_if = "is_false")]
    pub legacy_force: bool,

    /// Raw command line contained `-rf` or `-fr`. Superseded by `flags`.
    #[serde(rename = "is_rm_rf", default, skip_serializing_if = "is_false")]
    pub legacy_rm_rf: bool,
}

impl Event {
    /// Local hour of day (0-23) in the offset the event was recorded with.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Distinct extensions touched by this command.
    pub fn unique_extensions(&self) -> BTreeSet<&str> {
        self.file_extensions.iter().map(String::as_str).collect()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Older writers emitted `"flags": null` for programs without tracked flags.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Older writers recorded blank input as `"cmd": ""`; such a record never ran.
fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let command = String::deserialize(deserializer)?;
    if command.trim().is_empty() {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&command),
            &"a non-empty command",
        ));
    }
    Ok(command)
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
