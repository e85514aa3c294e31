//! YAML parsing for per-set `questions.yaml` files
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for build tools:
//!
//! - **Per-set failures**: A missing, unreadable or malformed metadata file is turned into a
//!   [`SkipReason`] instead of an error. The rebuild reports it and moves on to the next set.
//!
//! - **Values as written**: Field values are carried through untouched, whatever their YAML
//!   type. Only an absent key or an explicit `null` falls back to a default.
//!
//! - **Strict shape**: The document itself must be a mapping. Empty files and top-level
//!   sequences are parse errors, not empty records.

pub mod metadata;
pub mod values;

pub use metadata::{SkipReason, load_metadata, parse_metadata};
