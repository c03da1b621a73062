//! Pure state-transition function
//!
//! Applies a [`MappingAction`] to an [`IdMapping`] and produces the next
//! mapping. No ambient state: callers pass the current value and the policy
//! explicitly and receive the successor.

use crate::action::MappingAction;
use crate::config::DuplicatePolicy;
use crate::error::StoreError;
use navedit_ids::IdMapping;

/// Apply one action to the current mapping
///
/// Synchronous and side-effect free; on error the caller's mapping is
/// untouched and remains valid.
///
/// # Errors
/// Returns [`StoreError::Mapping`] when a `ReplaceAll` carries a duplicate
/// session id and `policy` is [`DuplicatePolicy::Reject`]. `AssignOne` never
/// fails.
pub fn apply(
    state: &IdMapping,
    action: MappingAction,
    policy: DuplicatePolicy,
) -> Result<IdMapping, StoreError> {
    match action {
        MappingAction::ReplaceAll { mapping } => match policy {
            DuplicatePolicy::Reject => Ok(state.replace_all(mapping)?),
            DuplicatePolicy::LastWins => Ok(state.replace_all_lossy(mapping)),
        },
        MappingAction::AssignOne {
            menu_item_id,
            session_id,
        } => Ok(state.assign(menu_item_id, session_id)),
    }
}
