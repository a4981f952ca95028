use std::collections::HashMap;

use graphql_tools::introspection::{IntrospectionQuery, IntrospectionType};
use tracing::instrument;

/// In-memory view of an introspected schema: every named type definition
/// keyed by its name, plus the root operation type names.
#[derive(Debug)]
pub struct SchemaState {
    /// A map of all named definitions (def_name, def) that exist in the schema.
    pub definitions: HashMap<String, IntrospectionType>,
    /// The root entrypoints
    pub query_type: String,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
}

impl SchemaState {
    #[instrument(level = "trace", skip(introspection), name = "new_schema_state")]
    pub fn new(introspection: IntrospectionQuery) -> Self {
        let schema = introspection.__schema;

        Self {
            query_type: schema.query_type.name,
            mutation_type: schema.mutation_type.map(|t| t.name),
            subscription_type: schema.subscription_type.map(|t| t.name),
            definitions: Self::build_map(schema.types),
        }
    }

    fn build_map(types: Vec<IntrospectionType>) -> HashMap<String, IntrospectionType> {
        types
            .into_iter()
            .map(|def| (type_definition_name(&def).to_string(), def))
            .collect()
    }

    /// The declared root operation types, in query/mutation/subscription order.
    pub fn root_type_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.query_type.as_str())
            .chain(self.mutation_type.as_deref())
            .chain(self.subscription_type.as_deref())
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn type_by_name(&self, name: &str) -> Option<&IntrospectionType> {
        self.definitions.get(name)
    }
}

pub fn type_definition_name(def: &IntrospectionType) -> &str {
    match def {
        IntrospectionType::SCALAR(scalar_type) => &scalar_type.name,
        IntrospectionType::OBJECT(object_type) => &object_type.name,
        IntrospectionType::INTERFACE(interface_type) => &interface_type.name,
        IntrospectionType::UNION(union_type) => &union_type.name,
        IntrospectionType::ENUM(enum_type) => &enum_type.name,
        IntrospectionType::INPUT_OBJECT(input_object_type) => &input_object_type.name,
    }
}
