//! # Snapshot Testing Support
//!
//! - **`normalize`**: reduces a [`ParsedDocument`](crate::parsing::ParsedDocument)
//!   to plain strings keyed by entity, stable enough to compare in tests
//! - **`invariants`**: structural checks every parse must satisfy (evidence
//!   present and in range, handles valid, one record per data point)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
