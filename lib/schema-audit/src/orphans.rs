use std::collections::HashSet;

use crate::schema_state::SchemaState;

/// Every type in the schema's type map that the walk never recorded,
/// sorted alphabetically so runs are reproducible.
pub fn orphan_type_names(state: &SchemaState, visited: &HashSet<String>) -> Vec<String> {
    let mut orphans: Vec<String> = state
        .type_names()
        .filter(|name| !visited.contains(*name))
        .map(str::to_string)
        .collect();
    orphans.sort();
    orphans
}

/// The report is the only output of a run: a fixed header followed by one
/// type name per line.
pub fn render_report(orphans: &[String]) -> String {
    let mut out = String::from("Orphan types:\n");

    if orphans.is_empty() {
        out.push_str("(none)\n");
        return out;
    }

    for name in orphans {
        out.push_str(name);
        out.push('\n');
    }

    out
}
