//! Navedit Id System
//!
//! Bidirectional id mapping between persisted menu items and editing blocks.
//!
//! # Overview
//!
//! A menu editing session juggles two id spaces: the backing store assigns
//! each persisted menu item a stable [`MenuItemId`], while the editor
//! assigns each block instance an ephemeral [`SessionId`]. This crate
//! provides:
//! - **MenuItemId / SessionId**: newtypes for the two spaces
//! - **IdMapping**: a consistent forward/backward lookup pair
//! - **MappingError**: the lossy-inversion failure surfaced to callers
//!
//! # Example
//!
//! ```rust
//! use navedit_ids::{IdMapping, MenuItemId, SessionId};
//!
//! let session = SessionId::new();
//! let mapping = IdMapping::new().assign(MenuItemId::new(7), session);
//!
//! assert_eq!(mapping.session_for(MenuItemId::new(7)), Some(session));
//! assert_eq!(mapping.menu_item_for(session), Some(MenuItemId::new(7)));
//! ```

#![warn(missing_docs)]

pub mod id;
pub mod mapping;

// Re-exports
pub use id::{MenuItemId, SessionId};
pub use mapping::{IdMapping, MappingError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
