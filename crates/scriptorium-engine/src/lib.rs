pub mod error;
pub mod export;
pub mod io;
pub mod models;
pub mod parsing;
pub mod settings;
pub mod summary;

// Re-export key types for easier usage
pub use error::{Diagnostic, DiagnosticKind, ParseError};
pub use export::RecordSet;
pub use io::*;
pub use parsing::{ParsedDocument, parse_document, parse_str};
pub use settings::Settings;
pub use summary::{Summary, render_summary};
