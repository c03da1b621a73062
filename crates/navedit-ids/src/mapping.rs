//! Bidirectional id mapping
//!
//! Provides [`IdMapping`], a pair of lookup tables translating between the
//! stable [`MenuItemId`] space and the ephemeral [`SessionId`] space.

use crate::id::{MenuItemId, SessionId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Paired forward/backward lookup between menu item ids and session ids
///
/// `forward` maps menu item id to session id; `backward` is always derived
/// from `forward` by full inversion, never by patching a single entry. Both
/// tables are insertion-ordered so inversion order is deterministic.
///
/// Every operation is a pure transition: it leaves `self` untouched and
/// returns the next mapping value.
///
/// # Example
/// ```
/// use navedit_ids::{IdMapping, MenuItemId, SessionId};
///
/// let session = SessionId::new();
/// let mapping = IdMapping::new().assign(MenuItemId::new(1), session);
///
/// assert_eq!(mapping.session_for(MenuItemId::new(1)), Some(session));
/// assert_eq!(mapping.menu_item_for(session), Some(MenuItemId::new(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdMapping {
    /// Menu item id -> session id
    forward: IndexMap<MenuItemId, SessionId>,

    /// Session id -> menu item id, the inverse of `forward`
    backward: IndexMap<SessionId, MenuItemId>,
}

impl IdMapping {
    /// Create an empty mapping (session start)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire mapping with a freshly loaded correspondence
    ///
    /// Prior state is discarded, not merged. `backward` is recomputed as the
    /// exact inverse of `pairs`.
    ///
    /// # Errors
    /// Returns [`MappingError::DuplicateSessionId`] if two menu item ids
    /// claim the same session id; inverting such a mapping would silently
    /// drop one of them, so the replacement is refused and `self` stands.
    /// Callers that want the permissive last-wins behavior instead use
    /// [`IdMapping::replace_all_lossy`].
    pub fn replace_all(
        &self,
        pairs: IndexMap<MenuItemId, SessionId>,
    ) -> Result<Self, MappingError> {
        let mut backward = IndexMap::with_capacity(pairs.len());
        for (&menu_item_id, &session_id) in &pairs {
            if let Some(first) = backward.insert(session_id, menu_item_id) {
                return Err(MappingError::DuplicateSessionId {
                    session_id,
                    first,
                    second: menu_item_id,
                });
            }
        }
        Ok(Self {
            forward: pairs,
            backward,
        })
    }

    /// Replace the entire mapping, tolerating duplicate session ids
    ///
    /// When two menu item ids claim the same session id, the one later in
    /// insertion order wins the backward entry and the earlier claim is
    /// dropped from `backward` (its forward entry remains).
    #[must_use]
    pub fn replace_all_lossy(&self, pairs: IndexMap<MenuItemId, SessionId>) -> Self {
        let backward = invert(&pairs);
        Self {
            forward: pairs,
            backward,
        }
    }

    /// Add or overwrite a single pair
    ///
    /// Inserts the forward entry, then rebuilds `backward` by full inversion
    /// of the updated forward table. Re-assigning a known `menu_item_id`
    /// replaces its session id and drops the stale backward entry. Assigning
    /// a `session_id` already held by another menu item leaves that older
    /// forward entry in place but hands the backward entry to whichever
    /// claim sits later in insertion order.
    ///
    /// Idempotent for a repeated identical pair.
    #[must_use]
    pub fn assign(&self, menu_item_id: MenuItemId, session_id: SessionId) -> Self {
        let mut forward = self.forward.clone();
        forward.insert(menu_item_id, session_id);
        let backward = invert(&forward);
        Self { forward, backward }
    }

    /// Session id currently standing for a menu item
    #[inline]
    #[must_use]
    pub fn session_for(&self, menu_item_id: MenuItemId) -> Option<SessionId> {
        self.forward.get(&menu_item_id).copied()
    }

    /// Menu item a session id stands for
    #[inline]
    #[must_use]
    pub fn menu_item_for(&self, session_id: SessionId) -> Option<MenuItemId> {
        self.backward.get(&session_id).copied()
    }

    /// Number of forward entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True if no pair is mapped
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate forward pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (MenuItemId, SessionId)> + '_ {
        self.forward.iter().map(|(&m, &s)| (m, s))
    }

    /// Forward table (menu item id -> session id)
    #[inline]
    #[must_use]
    pub fn forward(&self) -> &IndexMap<MenuItemId, SessionId> {
        &self.forward
    }

    /// Backward table (session id -> menu item id)
    #[inline]
    #[must_use]
    pub fn backward(&self) -> &IndexMap<SessionId, MenuItemId> {
        &self.backward
    }
}

/// Full inversion with last-encountered-wins on duplicate session ids
fn invert(forward: &IndexMap<MenuItemId, SessionId>) -> IndexMap<SessionId, MenuItemId> {
    let mut backward = IndexMap::with_capacity(forward.len());
    for (&menu_item_id, &session_id) in forward {
        backward.insert(session_id, menu_item_id);
    }
    backward
}

/// Errors for id mapping operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// Two menu item ids claim the same session id
    #[error("session id {session_id} claimed by both menu item {first} and menu item {second}")]
    DuplicateSessionId {
        /// The session id claimed twice
        session_id: SessionId,
        /// Menu item holding the earlier claim
        first: MenuItemId,
        /// Menu item holding the later claim
        second: MenuItemId,
    },
}
