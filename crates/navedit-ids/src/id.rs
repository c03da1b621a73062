//! Identifier newtypes for the two id spaces of an editing session
//!
//! A menu item lives in two id spaces at once while it is being edited:
//! the backing store knows it by a stable [`MenuItemId`], the editing
//! session knows it by an ephemeral [`SessionId`] assigned to the block
//! instance that renders it.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a persisted menu item, assigned by the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u64);

impl MenuItemId {
    /// Wrap a raw store-assigned id
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for MenuItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ephemeral identifier for an editable block within the current session
///
/// Session ids are minted when a block instance is created and are never
/// persisted; only the menu items they stand for outlive the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Mint a fresh session id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_id_round_trips_raw_value() {
        let id = MenuItemId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(MenuItemId::from(42), id);
    }

    #[test]
    fn menu_item_id_display() {
        assert_eq!(MenuItemId::new(7).to_string(), "7");
    }

    #[test]
    fn session_id_new_is_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn session_id_parses_its_own_display() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn session_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let menu_item = MenuItemId::new(3);
        assert_eq!(serde_json::to_string(&menu_item).unwrap(), "3");

        let session = SessionId(Uuid::nil());
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, format!("\"{}\"", Uuid::nil()));
    }
}
