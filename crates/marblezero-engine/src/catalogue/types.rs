use serde::Deserialize;

use crate::condition::Condition;

/// Top-level shape of a catalogue file: a list of `[[achievement]]` tables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogueFile {
    #[serde(default)]
    pub achievement: Vec<AchievementDef>,
}

/// One `[[achievement]]` entry, before validation.
///
/// Exactly one of `always`, `all`, `any` must be given. `occurrence` is
/// one-based and only valid alongside `all` or `any`.
///
/// ```toml
/// [[achievement]]
/// name = "Oncaller"
/// description = "Make a git commit in the middle of the night"
/// all = [
///   { sub_command = { command = "git", name = "commit" } },
///   { hour_range = { min = 2, max = 5 } },
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementDef {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Unlocked without any event.
    #[serde(default)]
    pub always: bool,

    /// Every condition must hold for an event to count.
    pub all: Option<Vec<Condition>>,

    /// Any condition may hold for an event to count.
    pub any: Option<Vec<Condition>>,

    /// Which matching event unlocks, counting from 1. Defaults to 1.
    pub occurrence: Option<u32>,
}
