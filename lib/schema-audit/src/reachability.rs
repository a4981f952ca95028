use std::collections::HashSet;

use graphql_tools::introspection::{
    IntrospectionField, IntrospectionInputTypeRef, IntrospectionOutputTypeRef, IntrospectionType,
};
use tracing::instrument;

use crate::schema_state::SchemaState;

/// Resolves the named type underneath any NON_NULL/LIST wrappers.
trait NamedType {
    fn named_type(&self) -> Option<&str>;
}

impl NamedType for IntrospectionOutputTypeRef {
    fn named_type(&self) -> Option<&str> {
        match self {
            IntrospectionOutputTypeRef::NON_NULL { of_type }
            | IntrospectionOutputTypeRef::LIST { of_type } => {
                of_type.as_deref().and_then(|inner| inner.named_type())
            }
            IntrospectionOutputTypeRef::SCALAR(named)
            | IntrospectionOutputTypeRef::OBJECT(named)
            | IntrospectionOutputTypeRef::INTERFACE(named)
            | IntrospectionOutputTypeRef::UNION(named)
            | IntrospectionOutputTypeRef::ENUM(named)
            | IntrospectionOutputTypeRef::INPUT_OBJECT(named) => Some(&named.name),
        }
    }
}

impl NamedType for IntrospectionInputTypeRef {
    fn named_type(&self) -> Option<&str> {
        match self {
            IntrospectionInputTypeRef::NON_NULL { of_type }
            | IntrospectionInputTypeRef::LIST { of_type } => {
                of_type.as_deref().and_then(|inner| inner.named_type())
            }
            IntrospectionInputTypeRef::SCALAR(named)
            | IntrospectionInputTypeRef::ENUM(named)
            | IntrospectionInputTypeRef::INPUT_OBJECT(named) => Some(&named.name),
        }
    }
}

/// Visits every named type reachable from the root operation types through
/// field return types and field/argument input types, and returns the set
/// of visited type names.
#[instrument(level = "trace", skip(state))]
pub fn reachable_type_names(state: &SchemaState) -> HashSet<String> {
    let mut visited = HashSet::new();
    for root in state.root_type_names() {
        visit(state, root, &mut visited);
    }
    visited
}

fn visit(state: &SchemaState, type_name: &str, visited: &mut HashSet<String>) {
    if !visited.insert(type_name.to_string()) {
        // Already recorded. Skipping here is what keeps self-referencing
        // types from recursing without bound.
        return;
    }

    match state.type_by_name(type_name) {
        Some(IntrospectionType::OBJECT(object_type)) => {
            for field in &object_type.fields {
                visit_field(state, field, visited);
            }
        }
        Some(IntrospectionType::INTERFACE(interface_type)) => {
            for field in &interface_type.fields {
                visit_field(state, field, visited);
            }
        }
        Some(IntrospectionType::INPUT_OBJECT(input_object_type)) => {
            for input_field in &input_object_type.input_fields {
                if let Some(name) = input_field
                    .type_ref
                    .as_ref()
                    .and_then(|type_ref| type_ref.named_type())
                {
                    visit(state, name, visited);
                }
            }
        }
        // Scalars and enums are leaves. A union declares no fields, so it
        // adds no reachability edges; its members count only where a field
        // or argument references them directly. A name with no definition
        // in the map adds no edges either.
        Some(IntrospectionType::SCALAR(_))
        | Some(IntrospectionType::ENUM(_))
        | Some(IntrospectionType::UNION(_))
        | None => {}
    }
}

fn visit_field(state: &SchemaState, field: &IntrospectionField, visited: &mut HashSet<String>) {
    if let Some(name) = field.type_ref.named_type() {
        visit(state, name, visited);
    }

    for arg in &field.args {
        if let Some(name) = arg
            .type_ref
            .as_ref()
            .and_then(|type_ref| type_ref.named_type())
        {
            visit(state, name, visited);
        }
    }
}
