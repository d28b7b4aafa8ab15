use crate::condition::Condition;
use crate::event::Event;

/// A boolean combination of [`Condition`]s, applied event by event.
///
/// Both combinators make a single pass over the history and keep matching
/// events in their original order, each at most once. `Any` is therefore a
/// stable set union: an event satisfying several conditions is still one
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Every condition must hold (`and`). An empty list matches everything.
    All(Vec<Condition>),
    /// At least one condition must hold (`or`). An empty list matches nothing.
    Any(Vec<Condition>),
}

impl Filter {
    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    pub fn or(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    pub fn conditions(&self) -> &[Condition] {
        match self {
            Self::All(c) | Self::Any(c) => c,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All(conditions) => conditions.iter().all(|c| c.matches(event)),
            Self::Any(conditions) => conditions.iter().any(|c| c.matches(event)),
        }
    }

    /// Lazily yield matching events in history order.
    pub fn iter<'a>(&'a self, events: &'a [Event]) -> impl Iterator<Item = &'a Event> + 'a {
        events.iter().filter(move |e| self.matches(e))
    }

    /// The matching subsequence of `events`.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
