//! Input format parsers.
//!
//! Each parser reads a schema format and produces a [`SchemaNode`](crate::ir::SchemaNode)
//! tree.

pub(crate) mod jsonschema;

pub use jsonschema::{ParseError, parse_json_schema, parse_json_schema_str};
