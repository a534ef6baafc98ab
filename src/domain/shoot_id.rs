//! Type-safe record identifier.
//!
//! [`ShootId`] is a newtype wrapper around [`uuid::Uuid`] (v4). Identity is
//! bucket-scoped: a record that moves between the pending and edited
//! buckets is issued a fresh `ShootId` and the old one is abandoned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a shoot record within its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ShootId(uuid::Uuid);

impl ShootId {
    /// Mints a new random `ShootId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `ShootId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ShootId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShootId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}
