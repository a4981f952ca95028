pub mod orphans;
pub mod reachability;
pub mod schema_state;

pub use crate::orphans::{orphan_type_names, render_report};
pub use crate::reachability::reachable_type_names;
pub use crate::schema_state::SchemaState;
