//! Capability declarations of the database shell API.
//!
//! This is the fixed surface scripts can call through the `db` binding.
//! Result types outside the [`SHELL_NAMESPACE`] family (`long`, `String`,
//! `void`, driver types) are leaves: completion stops there.

use super::registry::{ApiRegistry, FieldDecl, RootBinding, TypeDecl};

/// Namespace shared by every shell API type.
pub const SHELL_NAMESPACE: &str = "mongo.api";

/// Type bound to `db` at the top level of every script.
pub const DB: &str = "DB";
pub const COLLECTION: &str = "Collection";
pub const FIND_RESULT: &str = "FindResultIterable";
pub const OBJECT_LIST: &str = "ObjectListPresentation";

/// Root bindings available in every script.
pub fn shell_roots() -> Vec<RootBinding> {
    vec![RootBinding::new("db", DB)]
}

/// The full shell API.
pub fn shell_registry() -> ApiRegistry {
    [db(), collection(), find_result(), object_list()]
        .into_iter()
        .collect()
}

fn db() -> TypeDecl {
    TypeDecl::new(DB, SHELL_NAMESPACE).fields([
        FieldDecl::method("getCollection", COLLECTION)
            .with_doc("Returns a collection object for the given collection name."),
        FieldDecl::method("getCollectionNames", OBJECT_LIST)
            .with_doc("Returns the names of all collections in the current database."),
        FieldDecl::method("createCollection", "void")
            .with_doc("Creates a new collection explicitly."),
        FieldDecl::method("getName", "String"),
        FieldDecl::method("getSiblingDB", DB)
            .with_doc("Returns another database on the same connection."),
        FieldDecl::method("stats", OBJECT_LIST),
        FieldDecl::method("runCommand", OBJECT_LIST)
            .with_doc("Runs a database command."),
        FieldDecl::method("serverStatus", OBJECT_LIST),
        FieldDecl::method("version", "String"),
        FieldDecl::method("dropDatabase", "void")
            .with_doc("Removes the current database, deleting the associated data files."),
        FieldDecl::method("getMongoDb", "MongoDatabase").hidden(),
    ])
}

fn collection() -> TypeDecl {
    TypeDecl::new(COLLECTION, SHELL_NAMESPACE).fields([
        FieldDecl::method("find", FIND_RESULT)
            .with_doc("Selects documents in a collection and returns a cursor to them."),
        FieldDecl::method("find", FIND_RESULT),
        FieldDecl::method("insert", "void"),
        FieldDecl::method("remove", "long"),
        FieldDecl::method("update", "long"),
        FieldDecl::method("aggregate", OBJECT_LIST)
            .with_doc("Provides access to the aggregation pipeline."),
        FieldDecl::method("createIndex", "String"),
        FieldDecl::method("getIndexes", OBJECT_LIST),
        FieldDecl::method("reIndex", OBJECT_LIST),
        FieldDecl::method("dropIndex", "void"),
        FieldDecl::method("dropIndexes", "void"),
        FieldDecl::method("count", "long"),
        FieldDecl::method("count", "long").with_doc(
            "Wraps count to return a count of the number of documents in a collection or matching a query.",
        ),
        FieldDecl::method("distinct", OBJECT_LIST),
        FieldDecl::method("save", "long").with_doc(
            "Updates an existing document or inserts a new document, depending on its document parameter.",
        ),
        FieldDecl::method("mapReduce", OBJECT_LIST),
        FieldDecl::method("renameCollection", "void"),
        FieldDecl::method("stats", OBJECT_LIST),
        FieldDecl::method("validate", OBJECT_LIST),
        FieldDecl::method("drop", "void")
            .with_doc("Removes the specified collection from the database"),
        FieldDecl::method("getCollection", "MongoCollection").hidden(),
    ])
}

fn find_result() -> TypeDecl {
    TypeDecl::new(FIND_RESULT, SHELL_NAMESPACE).fields([
        FieldDecl::method("sort", FIND_RESULT)
            .with_doc("Specifies the order in which the query returns matching documents."),
        FieldDecl::method("limit", FIND_RESULT)
            .with_doc("Constrains the size of a cursor's result set."),
        FieldDecl::method("skip", FIND_RESULT),
        FieldDecl::method("projection", FIND_RESULT),
        FieldDecl::method("count", "long"),
        FieldDecl::method("explain", OBJECT_LIST),
        FieldDecl::method("toArray", "Array"),
        FieldDecl::method("iterator", "Iterator").hidden(),
    ])
}

fn object_list() -> TypeDecl {
    TypeDecl::new(OBJECT_LIST, SHELL_NAMESPACE).fields([
        FieldDecl::method("toArray", "Array"),
        FieldDecl::method("iterator", "Iterator").hidden(),
    ])
}
