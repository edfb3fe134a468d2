//! The static schema index built once from the API registry.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::registry::{ApiRegistry, RootBinding};
use super::table::{FieldDescription, SchemaTable, TypeSchema};
use crate::base::TypeId;

/// Sorted field tables for every API type reachable from the root bindings.
///
/// Built by an explicit call to [`StaticSchema::build`] and immutable
/// afterwards, so it can be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct StaticSchema {
    roots: TypeSchema,
    types: SchemaTable,
    namespace: SmolStr,
}

impl StaticSchema {
    /// Walk the registry from `roots`, indexing every visible field of every
    /// reachable type in `namespace`.
    ///
    /// Root types are always indexed. Any other type is only entered when it
    /// is declared in `namespace`; result types outside the family (scalars,
    /// driver types) stay leaves. Cyclic references are entered once.
    pub fn build(registry: &ApiRegistry, roots: &[RootBinding], namespace: &str) -> Self {
        let mut root_fields = TypeSchema::new();
        for binding in roots {
            let previous = root_fields.insert(FieldDescription::property(
                &binding.name,
                binding.type_id.clone(),
            ));
            if previous.is_some() {
                warn!(name = %binding.name, "root name bound twice; keeping the later binding");
            }
        }

        let mut collector = Collector {
            registry,
            namespace,
            visited: FxHashSet::default(),
            table: SchemaTable::new(),
        };
        for binding in roots {
            collector.collect(&binding.type_id);
        }

        debug!(
            roots = root_fields.len(),
            types = collector.table.len(),
            namespace,
            "built static schema"
        );

        Self {
            roots: root_fields,
            types: collector.table,
            namespace: SmolStr::new(namespace),
        }
    }

    /// The top-level bindings (`db`, ...).
    pub fn roots(&self) -> &TypeSchema {
        &self.roots
    }

    pub fn types(&self) -> &SchemaTable {
        &self.types
    }

    pub fn type_schema(&self, type_id: &TypeId) -> Option<&TypeSchema> {
        self.types.get(type_id)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

struct Collector<'r> {
    registry: &'r ApiRegistry,
    namespace: &'r str,
    visited: FxHashSet<TypeId>,
    table: SchemaTable,
}

impl Collector<'_> {
    fn collect(&mut self, type_id: &TypeId) {
        if !self.visited.insert(type_id.clone()) {
            return;
        }
        let registry = self.registry;
        let Some(decl) = registry.get(type_id) else {
            trace!(%type_id, "root type has no declaration");
            return;
        };

        let mut schema = TypeSchema::new();
        let mut nested = Vec::new();
        for field in decl.fields.iter().filter(|field| !field.hidden) {
            schema.insert_overload(field.describe());
            if registry.in_namespace(&field.result, self.namespace) {
                nested.push(&field.result);
            }
        }
        self.table.insert_type(type_id.clone(), schema);

        for result in nested {
            self.collect(result);
        }
    }
}
