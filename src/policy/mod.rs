//! Ordering policy: rank tables and comparators.

pub mod ranks;
pub mod comparator;

pub use ranks::{event_rank, function_rank, EVENT_PRIORITY, FUNCTION_PRIORITY};
pub use comparator::{alphabetical, priority, PriorityKey};
