// src/specs/mod.rs
//! # Extraction specs
//!
//! A spec says *where the data lives in the markup*: which node is the
//! repeating unit (the container) and, inside each container, which node
//! holds each named field. Extraction walks the containers in document
//! order and projects every one into a [`Record`](crate::record::Record)
//! whose fields follow the spec's field order.
//!
//! ## Conventions
//! - Nodes are addressed by (tag, class token) through
//!   [`NodeQuery`]; lookups never reach outside their container.
//! - A container missing any field is skipped with a warning; it never
//!   aborts the batch.
//! - Specs only extract. Fetching and persistence live in `core::net` and
//!   `file`.
//!
//! ## Current specs
//! - `quotes` – `div.quote` containers with `span.text` and `small.author`.
pub mod quotes;

use crate::core::html::NodeQuery;

/// One named field and where to find it inside a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub query: NodeQuery,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, query: NodeQuery) -> Self {
        Self { name: name.into(), query }
    }
}

/// The repeating unit and its fields, in output column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub container: NodeQuery,
    pub fields: Vec<FieldSpec>,
}

impl Default for ItemSpec {
    fn default() -> Self { quotes::spec() }
}

impl ItemSpec {
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
