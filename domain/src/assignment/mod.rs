//! Assignment conflict resolution
//!
//! When a set of queries is selected for bulk assignment, this module works
//! out which judges already hold which of them:
//!
//! ```text
//! selected query IDs ──► compute_judge_assignment_status ──► JudgeStatusMap
//!                                                               │
//!                  roster ──► partition_judges ◄────────────────┤
//!                               │                               │
//!                 assignable / fully conflicted                 │
//!                                                               │
//!          selected judges ──► compute_assignment_impact ◄──────┘
//!                               │
//!                     new vs skipped counts
//! ```
//!
//! All three steps are pure. Applying the assignment is the caller's job,
//! and it must skip the pairs counted as duplicates so a query never holds
//! two assignments for the same judge.

pub mod conflict;
pub mod impact;
pub mod lookup;
pub mod partition;

pub use conflict::{
    JudgeAssignmentStatus, JudgeStatusMap, compute_judge_assignment_status, distinct_selection,
};
pub use impact::{AssignmentImpact, JudgeImpact, compute_assignment_impact};
pub use lookup::QueryLookup;
pub use partition::{JudgeCandidate, JudgePartition, partition_judges};
