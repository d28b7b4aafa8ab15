//! The ordered set of achievement rules, declared as TOML data.
//!
//! The built-in catalogue is compiled into the binary from
//! `catalogue/achievements.toml`; it is not read from disk at runtime.

pub mod types;

use std::collections::HashSet;
use std::num::NonZeroUsize;

use types::{AchievementDef, CatalogueFile};

use crate::engine::{self, Summary};
use crate::event::Event;
use crate::filter::Filter;
use crate::rule::{AchievementResult, AchievementRule};
use crate::selector::Selector;

const BUILTIN: &str = include_str!("../../catalogue/achievements.toml");

/// Longest achievement name, in characters, that fits the achievements list.
pub const MAX_NAME_LEN: usize = 29;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// The text is not valid TOML or does not match the catalogue schema.
    Toml(String),
    /// None of `always`, `all`, `any` was given.
    MissingUnlock { name: String },
    /// More than one of `always`, `all`, `any` was given.
    ConflictingUnlock { name: String },
    /// `all` or `any` was an empty list.
    EmptyConditions { name: String },
    /// `occurrence = 0`; counting starts at 1.
    ZeroOccurrence { name: String },
    /// `occurrence` given on an `always` entry.
    OccurrenceWithoutConditions { name: String },
    DuplicateName { name: String },
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml(msg) => write!(f, "invalid catalogue: {msg}"),
            Self::MissingUnlock { name } => {
                write!(f, "achievement \"{name}\": one of always, all, any is required")
            }
            Self::ConflictingUnlock { name } => {
                write!(f, "achievement \"{name}\": always, all and any are exclusive")
            }
            Self::EmptyConditions { name } => {
                write!(f, "achievement \"{name}\": condition list is empty")
            }
            Self::ZeroOccurrence { name } => {
                write!(f, "achievement \"{name}\": occurrence counts from 1")
            }
            Self::OccurrenceWithoutConditions { name } => {
                write!(f, "achievement \"{name}\": occurrence needs all or any")
            }
            Self::DuplicateName { name } => write!(f, "duplicate achievement name \"{name}\""),
        }
    }
}

impl std::error::Error for CatalogueError {}

/// Non-fatal catalogue issue reported by [`Catalogue::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    NameTooLong { name: String, len: usize },
}

impl std::fmt::Display for LintWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooLong { name, len } => write!(
                f,
                "achievement name \"{name}\" is too long: {len} > {MAX_NAME_LEN} characters"
            ),
        }
    }
}

/// Ordered, validated achievement rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalogue {
    rules: Vec<AchievementRule>,
}

impl Catalogue {
    /// The catalogue shipped with marblezero.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded file is invalid, which the unit
    /// tests rule out.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::from_toml(BUILTIN)
    }

    /// Parse and validate catalogue TOML.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] for malformed TOML or an invalid entry.
    pub fn from_toml(content: &str) -> Result<Self, CatalogueError> {
        let file: CatalogueFile =
            toml::from_str(content).map_err(|e| CatalogueError::Toml(e.to_string()))?;
        Self::from_defs(file.achievement)
    }

    /// Build from already-deserialized definitions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first invalid entry's error.
    pub fn from_defs(defs: Vec<AchievementDef>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(defs.len());
        for def in defs {
            if !seen.insert(def.name.clone()) {
                return Err(CatalogueError::DuplicateName { name: def.name });
            }
            rules.push(into_rule(def)?);
        }
        Ok(Self { rules })
    }

    pub fn from_rules(rules: Vec<AchievementRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AchievementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AchievementRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Evaluate every rule against `history`, in catalogue order.
    pub fn evaluate(&self, history: &[Event]) -> Vec<AchievementResult<'_>> {
        engine::evaluate_all(&self.rules, history)
    }

    pub fn summarize(&self, history: &[Event]) -> Summary {
        engine::summarize(&self.evaluate(history))
    }

    /// Presentation checks that do not make a rule invalid.
    pub fn lint(&self) -> Vec<LintWarning> {
        self.rules
            .iter()
            .filter_map(|r| {
                let len = r.name.chars().count();
                (len > MAX_NAME_LEN).then(|| LintWarning::NameTooLong {
                    name: r.name.clone(),
                    len,
                })
            })
            .collect()
    }
}

fn into_rule(def: AchievementDef) -> Result<AchievementRule, CatalogueError> {
    let AchievementDef {
        name,
        description,
        always,
        all,
        any,
        occurrence,
    } = def;

    let filter = match (always, all, any) {
        (true, None, None) => None,
        (false, Some(c), None) => Some(Filter::All(c)),
        (false, None, Some(c)) => Some(Filter::Any(c)),
        (false, None, None) => return Err(CatalogueError::MissingUnlock { name }),
        _ => return Err(CatalogueError::ConflictingUnlock { name }),
    };

    let selector = match filter {
        None if occurrence.is_some() => {
            return Err(CatalogueError::OccurrenceWithoutConditions { name });
        }
        None => Selector::Always,
        Some(filter) if filter.conditions().is_empty() => {
            return Err(CatalogueError::EmptyConditions { name });
        }
        Some(filter) => {
            let count = occurrence.unwrap_or(1);
            let Some(count) = usize::try_from(count).ok().and_then(NonZeroUsize::new) else {
                return Err(CatalogueError::ZeroOccurrence { name });
            };
            Selector::occurrence(filter, count)
        }
    };

    Ok(AchievementRule::new(name, description, selector))
}

#[cfg(test)]
mod tests;
