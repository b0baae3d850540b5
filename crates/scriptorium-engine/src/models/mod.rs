pub mod action_group;
pub mod actions;
pub mod evidence;
pub mod graph;
pub mod header;
pub mod peopla;
pub mod peorel;
pub mod table;
pub mod value;

pub use action_group::ActionGroup;
pub use actions::{ActionInstance, ActionLog};
pub use evidence::Evidence;
pub use graph::{ActionGroupId, DocumentGraph, EntityRef, PeoplaId, PeorelId};
pub use header::Header;
pub use peopla::{Peopla, PeoplaKind};
pub use peorel::{Gender, Peorel, gender_inference};
pub use table::{DataPoint, DataTable};
pub use value::{Bundle, Value, flatten_bundle, merge_bundle};
