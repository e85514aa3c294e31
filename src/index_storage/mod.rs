//! Reading and writing `index.yaml`
//!
//! The same file serves two roles. Before a run its `questionSets` field lists
//! identifiers and fixes the processing order; after a run it holds the summary
//! records. Writes go through a temp file and a rename so an interrupted run
//! leaves the previous index intact.

pub mod persistence;

pub use persistence::{parse_ordering, read_ordering, render_index, save_index};
