//! # Line Layer
//!
//! Everything that can be learned from one line in isolation: annotation
//! stripping, the leading markup run, body shapes and scope.

pub mod classify;
pub mod markup;
pub mod scope;

pub use classify::{
    ContentLine, LineClass, LineKind, Shapes, TranscriptionLineClassifier, strip_annotations,
};
pub use markup::{ContentMarkup, LeadingMarkup};
pub use scope::{Scope, extract_scope};
