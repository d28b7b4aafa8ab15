use serde::Serialize;

use crate::event::{Event, Timestamp};
use crate::selector::Selector;

/// Outcome of evaluating one rule against a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unlock {
    pub unlocked: bool,
    /// Timestamp of the unlocking event; `None` when locked or unconditional.
    pub awarded_at: Option<Timestamp>,
}

impl Unlock {
    pub const LOCKED: Self = Self {
        unlocked: false,
        awarded_at: None,
    };

    pub const fn at(ts: Timestamp) -> Self {
        Self {
            unlocked: true,
            awarded_at: Some(ts),
        }
    }

    pub const fn always() -> Self {
        Self {
            unlocked: true,
            awarded_at: None,
        }
    }
}

/// A named, declarative unlock condition over the whole history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementRule {
    pub name: String,
    pub description: String,
    #[serde(skip)]
    pub selector: Selector,
}

impl AchievementRule {
    pub fn new(name: impl Into<String>, description: impl Into<String>, selector: Selector) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            selector,
        }
    }

    pub fn evaluate(&self, events: &[Event]) -> Unlock {
        self.selector.evaluate(events)
    }
}

/// A rule paired with its status for one history snapshot. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementResult<'a> {
    #[serde(flatten)]
    pub rule: &'a AchievementRule,
    pub unlocked: bool,
    pub awarded_at: Option<Timestamp>,
}

impl<'a> AchievementResult<'a> {
    pub const fn new(rule: &'a AchievementRule, unlock: Unlock) -> Self {
        Self {
            rule,
            unlocked: unlock.unlocked,
            awarded_at: unlock.awarded_at,
        }
    }
}
