//! Action vocabulary for the mapping store
//!
//! Exactly two action shapes exist: a bulk replacement after an initial
//! load, and a single-pair assignment as items are created while editing.

use indexmap::IndexMap;
use navedit_ids::{MenuItemId, SessionId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A state transition request for the id mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MappingAction {
    /// Replace the whole mapping with a freshly loaded correspondence
    ReplaceAll {
        /// Complete menu-item-id to session-id correspondence
        mapping: IndexMap<MenuItemId, SessionId>,
    },

    /// Record the id pair of a newly created item
    AssignOne {
        /// Stable id assigned by the backing store
        menu_item_id: MenuItemId,
        /// Ephemeral id assigned by the editing session
        session_id: SessionId,
    },
}

impl Display for MappingAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReplaceAll { mapping } => {
                write!(f, "replace-all ({} pairs)", mapping.len())
            }
            Self::AssignOne {
                menu_item_id,
                session_id,
            } => {
                write!(f, "assign-one (menu item {menu_item_id} -> session {session_id})")
            }
        }
    }
}
