use std::num::NonZeroUsize;

use crate::event::Event;
use crate::filter::Filter;
use crate::rule::Unlock;

/// Decides whether a rule is unlocked and when, from the full history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Unlocked from the start, with no award time.
    Always,
    /// Unlocked by the match at zero-based `index` of `filter`; awarded at
    /// that event's timestamp.
    Nth { filter: Filter, index: usize },
}

impl Selector {
    /// The first matching event unlocks.
    pub const fn first(filter: Filter) -> Self {
        Self::nth(filter, 0)
    }

    /// The match at zero-based `index` unlocks: `nth(f, 2)` needs three matches.
    pub const fn nth(filter: Filter, index: usize) -> Self {
        Self::Nth { filter, index }
    }

    /// The `count`-th match unlocks, counting from one: `occurrence(f, 3)`
    /// is `nth(f, 2)`.
    pub const fn occurrence(filter: Filter, count: NonZeroUsize) -> Self {
        Self::nth(filter, count.get() - 1)
    }

    /// Evaluate against the full history.
    ///
    /// Scanning stops at the unlocking match, so appending events can never
    /// move an award later or revoke it.
    pub fn evaluate(&self, events: &[Event]) -> Unlock {
        match self {
            Self::Always => Unlock::always(),
            Self::Nth { filter, index } => filter
                .iter(events)
                .nth(*index)
                .map_or(Unlock::LOCKED, |e| Unlock::at(e.timestamp)),
        }
    }

    /// One-based number of matching events needed, or `None` for [`Self::Always`].
    pub const fn required_count(&self) -> Option<usize> {
        match self {
            Self::Always => None,
            Self::Nth { index, .. } => Some(index.saturating_add(1)),
        }
    }
}
