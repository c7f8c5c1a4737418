//! Country resolution engine.
//!
//! This module identifies country references given in any supported
//! classification scheme and projects them into a requested target scheme.
//! Matching is a sequential scan over the table's compiled patterns (or an
//! anchored string compare for code schemes); ambiguity and not-found
//! conditions are surfaced through warnings and sentinel values, never
//! through errors.

pub mod batch;
pub mod engine;
pub mod exclusion;
pub mod groups;
