//! Single-writer mapping store
//!
//! Owns the current [`IdMapping`] for one editing session and applies
//! transitions strictly one at a time. Created empty at session start and
//! simply dropped when the session ends; nothing here is persisted.

use crate::action::MappingAction;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::transition::apply;
use navedit_ids::{IdMapping, MenuItemId, SessionId};

/// Context object owning the id mapping of one editing session
#[derive(Debug, Default)]
pub struct MappingStore {
    config: StoreConfig,
    state: IdMapping,
}

impl MappingStore {
    /// Create an empty store with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            state: IdMapping::new(),
        }
    }

    /// Apply one action to the held mapping
    ///
    /// # Errors
    /// Returns [`StoreError`] when the transition is refused; the held
    /// mapping is left unchanged in that case.
    pub fn dispatch(&mut self, action: MappingAction) -> Result<(), StoreError> {
        tracing::debug!("Applying mapping action: {}", action);

        match apply(&self.state, action, self.config.duplicate_policy) {
            Ok(next) => {
                self.state = next;
                tracing::debug!("Mapping now holds {} pairs", self.state.len());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Mapping action refused: {}", e);
                Err(e)
            }
        }
    }

    /// Current mapping state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &IdMapping {
        &self.state
    }

    /// Store configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Session id currently standing for a menu item
    #[inline]
    #[must_use]
    pub fn session_for(&self, menu_item_id: MenuItemId) -> Option<SessionId> {
        self.state.session_for(menu_item_id)
    }

    /// Menu item a session id stands for
    #[inline]
    #[must_use]
    pub fn menu_item_for(&self, session_id: SessionId) -> Option<MenuItemId> {
        self.state.menu_item_for(session_id)
    }

    /// Number of mapped pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// True if nothing is mapped yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn menu(raw: u64) -> MenuItemId {
        MenuItemId::new(raw)
    }

    fn session(n: u128) -> SessionId {
        SessionId(Uuid::from_u128(n))
    }

    #[test]
    fn store_starts_empty() {
        let store = MappingStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn store_dispatch_assign_updates_both_directions() {
        let mut store = MappingStore::new();
        store
            .dispatch(MappingAction::AssignOne {
                menu_item_id: menu(1),
                session_id: session(10),
            })
            .unwrap();

        assert_eq!(store.session_for(menu(1)), Some(session(10)));
        assert_eq!(store.menu_item_for(session(10)), Some(menu(1)));
    }

    #[test]
    fn store_refused_dispatch_keeps_prior_state() {
        let mut store = MappingStore::new();
        store
            .dispatch(MappingAction::AssignOne {
                menu_item_id: menu(1),
                session_id: session(10),
            })
            .unwrap();

        let result = store.dispatch(MappingAction::ReplaceAll {
            mapping: IndexMap::from([(menu(2), session(20)), (menu(3), session(20))]),
        });

        assert!(result.is_err());
        assert_eq!(store.session_for(menu(1)), Some(session(10)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_last_wins_config_applies_lossy_replacement() {
        let config = StoreConfig::new().with_duplicate_policy(DuplicatePolicy::LastWins);
        let mut store = MappingStore::with_config(config);

        store
            .dispatch(MappingAction::ReplaceAll {
                mapping: IndexMap::from([(menu(1), session(10)), (menu(2), session(10))]),
            })
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.menu_item_for(session(10)), Some(menu(2)));
    }
}
