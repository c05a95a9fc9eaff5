//! Entity-table orchestrator
//!
//! One generic tabular management component drives the admin screens for
//! every entity kind. It owns the pagination/sort/filter query, delegates
//! fetching to the store, synthesizes the trailing actions column, and
//! routes action clicks to the entity-specific modal forms.
//!
//! The state machines (query, list state, active modal, action sets) are
//! plain types below the GPUI layer so their invariants are unit-tested
//! without a window.

mod actions;
mod column;
mod list_state;
mod modal;
mod pagination;
mod table;

pub use actions::{RowAction, actions_for};
pub use column::Column;
pub use list_state::ListQueryState;
pub use modal::ActiveModal;
pub use table::{EntityForms, EntityTable, EntityTableParams, FormFactory};
