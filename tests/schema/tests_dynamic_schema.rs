#![allow(clippy::unwrap_used)]

//! Dynamic schema table tests.

use std::borrow::Cow;

use shellhint::TypeId;
use shellhint::schema::{FieldDescription, SchemaTable, TypeSchema, join};

fn schema(fields: &[(&str, &str)]) -> TypeSchema {
    fields
        .iter()
        .map(|(name, ty)| FieldDescription::property(name, *ty))
        .collect()
}

#[test]
fn test_add_field_creates_type() {
    let mut table = SchemaTable::new();
    table.add_field("users", FieldDescription::property("name", "String"));
    table.add_field("users", FieldDescription::property("age", "Number"));

    let users = table.get(&TypeId::from("users")).unwrap();
    let names: Vec<_> = users.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["age", "name"]);
}

#[test]
fn test_add_field_replaces_same_name() {
    let mut table = SchemaTable::new();
    table.add_field("users", FieldDescription::property("age", "String"));
    table.add_field("users", FieldDescription::property("age", "Number"));

    let age = table.get(&TypeId::from("users")).unwrap().get("age").unwrap();
    assert_eq!(age.declared_type.as_str(), "Number");
}

#[test]
fn test_join_single_side_is_borrowed() {
    let only = schema(&[("a", "A")]);
    assert!(matches!(join(Some(&only), None), Some(Cow::Borrowed(_))));
    assert!(matches!(join(None, Some(&only)), Some(Cow::Borrowed(_))));
    assert!(join(None, None).is_none());
}

#[test]
fn test_join_dynamic_wins() {
    let static_side = schema(&[("foo", "A"), ("kept", "K")]);
    let dynamic_side = schema(&[("foo", "B"), ("extra", "E")]);

    let joined = join(Some(&static_side), Some(&dynamic_side)).unwrap();
    let fields: Vec<_> = joined
        .iter()
        .map(|f| (f.name.as_str(), f.declared_type.as_str()))
        .collect();
    assert_eq!(fields, vec![("extra", "E"), ("foo", "B"), ("kept", "K")]);
}

#[cfg(feature = "json")]
mod json {
    use super::*;

    #[test]
    fn test_observe_json_document() {
        let mut table = SchemaTable::new();
        let doc = serde_json::json!({
            "name": "Ada",
            "age": 36,
            "address": { "city": "London", "zip": "N1" },
            "tags": ["a", "b"]
        });
        table.observe_json("users", &doc);

        let users = table.get(&TypeId::from("users")).unwrap();
        assert_eq!(users.get("name").unwrap().declared_type.as_str(), "String");
        assert_eq!(users.get("age").unwrap().declared_type.as_str(), "Number");
        assert_eq!(users.get("tags").unwrap().declared_type.as_str(), "Array");
        assert_eq!(
            users.get("address").unwrap().declared_type.as_str(),
            "users.address"
        );

        let address = table.get(&TypeId::from("users.address")).unwrap();
        assert_eq!(address.len(), 2);
    }

    #[test]
    fn test_observe_scalar_records_nothing() {
        let mut table = SchemaTable::new();
        table.observe_json("users", &serde_json::json!(42));
        assert!(table.is_empty());
    }
}
