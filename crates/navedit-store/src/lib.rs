//! Navedit Mapping Store
//!
//! Single-writer state layer for the id mapping of a menu editing session.
//!
//! # Overview
//!
//! The store layer provides:
//! - **MappingAction**: the two dispatched action shapes
//! - **apply**: the pure `(state, action) -> state` transition function
//! - **MappingStore**: the context object that owns the state and sequences
//!   transitions one at a time
//! - **StoreConfig / DuplicatePolicy**: duplicate-session-id handling
//!
//! All transitions are synchronous, in-memory, and free of suspension
//! points; on error the held state is unchanged.
//!
//! # Example
//!
//! ```rust
//! use navedit_ids::{MenuItemId, SessionId};
//! use navedit_store::{MappingAction, MappingStore};
//!
//! let mut store = MappingStore::new();
//! let session = SessionId::new();
//!
//! store
//!     .dispatch(MappingAction::AssignOne {
//!         menu_item_id: MenuItemId::new(7),
//!         session_id: session,
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.session_for(MenuItemId::new(7)), Some(session));
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod config;
pub mod error;
pub mod store;
pub mod transition;

// Re-exports
pub use action::MappingAction;
pub use config::{DuplicatePolicy, StoreConfig};
pub use error::StoreError;
pub use store::MappingStore;
pub use transition::apply;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
