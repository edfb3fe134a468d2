//! Shared test fixtures and assertions.

pub mod schema_fixtures;
