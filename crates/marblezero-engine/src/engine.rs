//! Evaluate a rule set against one history snapshot.
//!
//! Status is always recomputed from raw history: there is no record of what
//! was unlocked before, so evaluating the same events twice gives the same
//! answer and a crash can never leave stale state behind.

use std::cmp::Reverse;

use serde::Serialize;

use crate::event::Event;
use crate::rule::{AchievementResult, AchievementRule};

/// Evaluate every rule, in order, against the same borrowed history.
///
/// Rules share nothing but the read-only slice, so one rule can never observe
/// or influence another.
pub fn evaluate_all<'a>(rules: &'a [AchievementRule], history: &[Event]) -> Vec<AchievementResult<'a>> {
    rules
        .iter()
        .map(|rule| AchievementResult::new(rule, rule.evaluate(history)))
        .collect()
}

/// Unlocked results, most recently awarded first.
///
/// The sort is stable, so equal award times keep catalogue order. Results
/// without an award time (unconditional rules) come last.
pub fn latest<'r, 'a>(results: &'r [AchievementResult<'a>]) -> Vec<&'r AchievementResult<'a>> {
    let mut unlocked: Vec<&AchievementResult<'a>> = results.iter().filter(|r| r.unlocked).collect();
    unlocked.sort_by_key(|r| Reverse(r.awarded_at));
    unlocked
}

/// Unlocked versus total counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub unlocked: usize,
    pub total: usize,
}

pub fn summarize(results: &[AchievementResult<'_>]) -> Summary {
    Summary {
        unlocked: results.iter().filter(|r| r.unlocked).count(),
        total: results.len(),
    }
}
