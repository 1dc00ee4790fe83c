use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a card inside the `CardSet` of one session.
///
/// Stable for the lifetime of the session and used as the join key for
/// queues and per-card progress.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardIndex(usize);

impl CardIndex {
    /// Creates a new `CardIndex`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying position
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardIndex({})", self.0)
    }
}

impl fmt::Display for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
