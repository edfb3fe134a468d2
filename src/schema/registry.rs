//! Declared capability tables for the scripting API.
//!
//! Every API type lists the operations it exposes to scripts, in declaration
//! order. The static index is built by walking these declarations from the
//! root bindings; nothing is discovered by inspecting values at runtime.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::warn;

use super::table::{FieldDescription, FieldKind};
use crate::base::TypeId;

/// A single declared operation or property of an API type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: SmolStr,
    pub result: TypeId,
    pub kind: FieldKind,
    /// Hidden fields exist on the type but are not part of the scripting
    /// surface; they are never indexed.
    pub hidden: bool,
    pub doc: Option<Arc<str>>,
}

impl FieldDecl {
    pub fn method(name: &str, result: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            result: TypeId::new(result),
            kind: FieldKind::Method,
            hidden: false,
            doc: None,
        }
    }

    pub fn property(name: &str, result: &str) -> Self {
        Self {
            kind: FieldKind::Property,
            ..Self::method(name, result)
        }
    }

    /// Mark the field as hidden from scripting.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(Arc::from(doc));
        self
    }

    pub(crate) fn describe(&self) -> FieldDescription {
        FieldDescription {
            name: self.name.clone(),
            declared_type: self.result.clone(),
            kind: self.kind,
            doc: self.doc.clone(),
        }
    }
}

/// The capability set of one API type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub id: TypeId,
    /// API family the type belongs to. Traversal only follows result types
    /// declared in the family being indexed.
    pub namespace: SmolStr,
    pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
    pub fn new(id: &str, namespace: &str) -> Self {
        Self {
            id: TypeId::new(id),
            namespace: SmolStr::new(namespace),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDecl>) -> Self {
        self.fields.extend(fields);
        self
    }
}

/// A name bound at the top level of every script, such as `db`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootBinding {
    pub name: SmolStr,
    pub type_id: TypeId,
}

impl RootBinding {
    pub fn new(name: &str, type_id: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            type_id: TypeId::new(type_id),
        }
    }
}

/// Registry of declared API types, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct ApiRegistry {
    types: IndexMap<TypeId, TypeDecl>,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type. A second declaration of the same type replaces the
    /// first.
    pub fn declare(&mut self, decl: TypeDecl) {
        let id = decl.id.clone();
        if self.types.insert(id.clone(), decl).is_some() {
            warn!(type_id = %id, "API type declared twice; keeping the later declaration");
        }
    }

    pub fn get(&self, id: &TypeId) -> Option<&TypeDecl> {
        self.types.get(id)
    }

    /// True if `id` is declared and belongs to `namespace`.
    pub fn in_namespace(&self, id: &TypeId, namespace: &str) -> bool {
        self.get(id).is_some_and(|decl| decl.namespace.as_str() == namespace)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }
}

impl FromIterator<TypeDecl> for ApiRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        let mut registry = ApiRegistry::new();
        for decl in iter {
            registry.declare(decl);
        }
        registry
    }
}
