pub mod catalogue;
pub mod condition;
pub mod engine;
pub mod event;
pub mod filter;
pub mod parse;
pub mod rule;
pub mod selector;

pub use catalogue::Catalogue;
pub use condition::Condition;
pub use event::{Event, Timestamp};
pub use filter::Filter;
pub use parse::{ParseError, parse};
pub use rule::{AchievementResult, AchievementRule, Unlock};
pub use selector::Selector;
