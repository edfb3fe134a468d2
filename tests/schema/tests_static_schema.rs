#![allow(clippy::unwrap_used)]

//! Static schema construction tests.

use rstest::rstest;
use shellhint::TypeId;
use shellhint::schema::builtin::{
    COLLECTION, DB, FIND_RESULT, SHELL_NAMESPACE, shell_registry, shell_roots,
};
use shellhint::schema::{ApiRegistry, FieldDecl, FieldKind, RootBinding, StaticSchema, TypeDecl};

fn shell_schema() -> StaticSchema {
    StaticSchema::build(&shell_registry(), &shell_roots(), SHELL_NAMESPACE)
}

fn names(schema: &StaticSchema, type_id: &str) -> Vec<String> {
    schema
        .type_schema(&TypeId::from(type_id))
        .unwrap()
        .iter()
        .map(|f| f.name.to_string())
        .collect()
}

// =============================================================================
// SHELL API
// =============================================================================

#[test]
fn test_shell_roots() {
    let schema = shell_schema();
    let db = schema.roots().get("db").unwrap();
    assert_eq!(db.declared_type, TypeId::from(DB));
    assert_eq!(db.kind, FieldKind::Property);
    assert_eq!(schema.roots().len(), 1);
}

#[rstest]
#[case(DB, "getCollection", COLLECTION)]
#[case(DB, "getSiblingDB", DB)]
#[case(COLLECTION, "find", FIND_RESULT)]
#[case(COLLECTION, "count", "long")]
#[case(FIND_RESULT, "sort", FIND_RESULT)]
fn test_shell_field_types(#[case] owner: &str, #[case] field: &str, #[case] declared: &str) {
    let schema = shell_schema();
    let field = schema
        .type_schema(&TypeId::from(owner))
        .unwrap()
        .get(field)
        .unwrap();
    assert_eq!(field.declared_type.as_str(), declared);
    assert!(field.is_callable());
}

#[test]
fn test_overloads_collapse_to_one_field() {
    let schema = shell_schema();
    let fields = names(&schema, COLLECTION);
    assert_eq!(fields.iter().filter(|n| *n == "count").count(), 1);
    assert_eq!(fields.iter().filter(|n| *n == "find").count(), 1);

    let count = schema
        .type_schema(&TypeId::from(COLLECTION))
        .unwrap()
        .get("count")
        .unwrap();
    assert!(count.doc.is_some(), "documentation from the later overload");
}

#[test]
fn test_fields_sorted_by_name() {
    let fields = names(&shell_schema(), FIND_RESULT);
    let mut sorted = fields.clone();
    sorted.sort();
    assert_eq!(fields, sorted);
}

#[test]
fn test_non_api_results_are_leaves() {
    let schema = shell_schema();
    assert!(schema.type_schema(&TypeId::from("long")).is_none());
    assert!(schema.type_schema(&TypeId::from("MongoCollection")).is_none());
}

// =============================================================================
// CYCLES AND DETERMINISM
// =============================================================================

#[test]
fn test_self_reference_terminates() {
    let registry: ApiRegistry = [TypeDecl::new("Node", "graph")
        .field(FieldDecl::property("next", "Node"))
        .field(FieldDecl::property("value", "Number"))]
    .into_iter()
    .collect();

    let schema = StaticSchema::build(&registry, &[RootBinding::new("head", "Node")], "graph");

    let node = schema.type_schema(&TypeId::from("Node")).unwrap();
    assert_eq!(node.len(), 2);
    assert_eq!(node.get("next").unwrap().declared_type.as_str(), "Node");
    assert_eq!(schema.types().len(), 1);
}

#[test]
fn test_unreachable_types_not_indexed() {
    let registry: ApiRegistry = [
        TypeDecl::new("A", "api").field(FieldDecl::method("b", "B")),
        TypeDecl::new("B", "api"),
        TypeDecl::new("Orphan", "api").field(FieldDecl::method("a", "A")),
    ]
    .into_iter()
    .collect();

    let schema = StaticSchema::build(&registry, &[RootBinding::new("a", "A")], "api");
    assert!(schema.type_schema(&TypeId::from("B")).is_some());
    assert!(schema.type_schema(&TypeId::from("Orphan")).is_none());
}

#[test]
fn test_build_is_deterministic() {
    assert_eq!(shell_schema().types(), shell_schema().types());
    assert_eq!(shell_schema().roots(), shell_schema().roots());
}
