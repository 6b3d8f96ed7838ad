//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod bulk_assign;
pub mod label_queries;
pub mod load_experiment;
pub mod plan_assignment;
