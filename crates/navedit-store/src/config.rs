//! Store configuration

use serde::{Deserialize, Serialize};

/// What a bulk replacement does when two menu items claim one session id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Refuse the replacement and surface the collision to the caller
    #[default]
    Reject,

    /// Apply the replacement; the claim later in insertion order wins the
    /// backward entry and the earlier one is dropped
    LastWins,
}

/// Mapping store configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Duplicate-session-id handling for bulk replacements
    pub duplicate_policy: DuplicatePolicy,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With duplicate policy
    #[inline]
    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
