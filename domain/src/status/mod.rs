//! Query status derivation
//!
//! Labels each query row as Not Assigned, In Progress or Completed. See
//! [`rule`] for the decision table.

pub mod rule;
pub mod summary;

pub use rule::{QueryStatus, derive_status, status_display_name, status_display_name_raw};
pub use summary::{QueryFilter, StatusSummary};
