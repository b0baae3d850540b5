//! Syntax of each line shape. Every shape's knowledge lives in its own
//! module; the driver only decides which reading applies.

pub mod action;
pub mod attribute;
pub mod header;
pub mod peopla;
pub mod relation;
pub mod shortcut;
pub mod table;

pub use action::ActionDecl;
pub use attribute::Attribute;
pub use header::HeaderLine;
pub use peopla::{GroupPrefix, PeoplaDecl};
pub use relation::relation_label;
pub use shortcut::{ShortcutDef, shortcut_marker};
pub use table::{TableHeader, TableLine};
