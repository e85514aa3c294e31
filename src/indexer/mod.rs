//! Index building for question sets
//!
//! # Error Handling Strategy
//!
//! The indexer never aborts on a single bad question set:
//!
//! - **Per-set failures**: Missing or unparseable metadata files are reported and skipped.
//!   The rebuild always completes and returns whatever records it could assemble, even none.
//!
//! - **Order preservation**: Records appear in the same relative order as the ordering list.
//!
//! - **Explicit state**: The new index is returned as a value. Reading the ordering list and
//!   writing the result are left to [`crate::index_storage`].

pub mod builder;

pub use builder::{RebuildOutcome, SkippedSet, rebuild_index};
