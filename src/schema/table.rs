//! Schema tables: per-type sorted field maps.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{TypeId, prefix_range};

/// Whether a field is invoked or read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// An operation: `db.getCollection(...)`.
    Method,
    /// A plain value: `doc.name`.
    Property,
}

/// One exposed operation or field of a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescription {
    pub name: SmolStr,
    /// The type the field evaluates to. Resolution continues through it.
    pub declared_type: TypeId,
    pub kind: FieldKind,
    pub doc: Option<Arc<str>>,
}

impl FieldDescription {
    pub fn method(name: impl AsRef<str>, declared_type: impl Into<TypeId>) -> Self {
        Self {
            name: SmolStr::new(name),
            declared_type: declared_type.into(),
            kind: FieldKind::Method,
            doc: None,
        }
    }

    pub fn property(name: impl AsRef<str>, declared_type: impl Into<TypeId>) -> Self {
        Self {
            name: SmolStr::new(name),
            declared_type: declared_type.into(),
            kind: FieldKind::Property,
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn is_callable(&self) -> bool {
        self.kind == FieldKind::Method
    }
}

/// The fields of a single type, sorted by name. Names are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeSchema {
    fields: BTreeMap<SmolStr, FieldDescription>,
}

impl TypeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any field with the same name.
    pub fn insert(&mut self, field: FieldDescription) -> Option<FieldDescription> {
        self.fields.insert(field.name.clone(), field)
    }

    /// Insert another declaration of a possibly overloaded operation.
    ///
    /// The first declaration's result type is kept; documentation is taken
    /// from the first declaration that has any.
    pub fn insert_overload(&mut self, field: FieldDescription) {
        match self.fields.get_mut(&field.name) {
            Some(existing) => {
                if existing.doc.is_none() {
                    existing.doc = field.doc;
                }
            }
            None => {
                self.fields.insert(field.name.clone(), field);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescription> {
        self.fields.values()
    }

    /// Fields whose name starts with `prefix`, in name order.
    pub fn with_prefix<'s>(&'s self, prefix: &str) -> impl Iterator<Item = &'s FieldDescription> {
        prefix_range(&self.fields, prefix).map(|(_, field)| field)
    }

    /// Union of `self` and `overrides`; on a name conflict the field from
    /// `overrides` wins.
    pub fn merged_with(&self, overrides: &TypeSchema) -> TypeSchema {
        let mut fields = self.fields.clone();
        fields.extend(
            overrides
                .fields
                .iter()
                .map(|(name, field)| (name.clone(), field.clone())),
        );
        TypeSchema { fields }
    }
}

impl FromIterator<FieldDescription> for TypeSchema {
    fn from_iter<I: IntoIterator<Item = FieldDescription>>(iter: I) -> Self {
        let mut schema = TypeSchema::new();
        for field in iter {
            schema.insert(field);
        }
        schema
    }
}

/// Mapping from type to its fields.
///
/// The static index owns one built from the API registry. Host sessions own
/// another one describing shapes observed at runtime and lend it to each
/// completion request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaTable {
    types: FxHashMap<TypeId, TypeSchema>,
}

impl SchemaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, type_id: &TypeId) -> Option<&TypeSchema> {
        self.types.get(type_id)
    }

    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.types.contains_key(type_id)
    }

    pub fn insert_type(&mut self, type_id: TypeId, schema: TypeSchema) -> Option<TypeSchema> {
        self.types.insert(type_id, schema)
    }

    /// Record a single field of `type_id`, creating the type if needed.
    pub fn add_field(&mut self, type_id: impl Into<TypeId>, field: FieldDescription) {
        self.types.entry(type_id.into()).or_default().insert(field);
    }

    /// Number of types in the table.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeId, &TypeSchema)> {
        self.types.iter()
    }

    /// Record every key of an observed JSON document as a property of
    /// `type_id`.
    ///
    /// Object-valued keys get their own nested type (`<type>.<key>`) so that
    /// completion can continue through them. A non-object `value` records
    /// nothing.
    #[cfg(feature = "json")]
    pub fn observe_json(&mut self, type_id: impl Into<TypeId>, value: &serde_json::Value) {
        let type_id = type_id.into();
        let serde_json::Value::Object(document) = value else {
            return;
        };
        for (key, value) in document {
            let declared_type = match value {
                serde_json::Value::Object(_) => {
                    let nested = type_id.nested(key);
                    self.observe_json(nested.clone(), value);
                    nested
                }
                other => TypeId::new(json_type_name(other)),
            };
            self.add_field(type_id.clone(), FieldDescription::property(key, declared_type));
        }
    }
}

#[cfg(feature = "json")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "Boolean",
        serde_json::Value::Number(_) => "Number",
        serde_json::Value::String(_) => "String",
        serde_json::Value::Array(_) => "Array",
        serde_json::Value::Object(_) => "Object",
    }
}

/// Combine the static and dynamic view of one type.
///
/// If only one side knows the type it is used as is (borrowed). If both do,
/// the result is their union with dynamic fields overriding static ones of
/// the same name.
pub fn join<'a>(
    static_side: Option<&'a TypeSchema>,
    dynamic_side: Option<&'a TypeSchema>,
) -> Option<Cow<'a, TypeSchema>> {
    match (static_side, dynamic_side) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(Cow::Borrowed(only)),
        (Some(static_side), Some(dynamic_side)) => {
            Some(Cow::Owned(static_side.merged_with(dynamic_side)))
        }
    }
}
