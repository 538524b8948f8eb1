//! Schema-to-type compilation for several target languages.
//!
//! `structgen-typegen` turns a schema tree (titled objects, arrays and five
//! primitive kinds) into struct, class or interface declarations. One
//! traversal engine serves every language; backends only map field shapes to
//! tokens and lay out the result.
//!
//! # Architecture
//!
//! ```text
//! Input              IR                Pipeline                    Backends
//! ───────────     ──────────     ─────────────────────────     ──────────────
//! JSON Schema ─>  SchemaNode ─┬─> probe (features)       ─┐     C structs
//! (input/)        (ir.rs)     └─> traverse (TypeRecords) ─┼──>  C++ structs
//!                                 naming (dedup, collide) │     Java classes
//!                                 mapper (size constants) ┘     Go structs
//!                                                               Rust serde structs
//!                                                               TypeScript interfaces
//!                                                               JavaScript classes
//! ```
//!
//! Types are emitted dependencies first, fields in byte order of their names,
//! so output is deterministic and never needs forward declarations of value
//! types.
//!
//! # Example
//!
//! ```
//! use structgen_typegen::{CompileOptions, compile, get_backend, input};
//!
//! let json_schema = serde_json::json!({
//!     "title": "Order",
//!     "properties": {
//!         "id": { "type": "integer" },
//!         "tags": { "type": "array", "items": { "type": "string" } },
//!         "customer": {
//!             "title": "Customer",
//!             "properties": { "name": { "type": "string" } }
//!         }
//!     }
//! });
//!
//! let schema = input::parse_json_schema(&json_schema).unwrap();
//! let backend = get_backend("typescript").unwrap();
//! let ts = compile(&schema, backend, &CompileOptions::public()).unwrap();
//!
//! assert!(ts.starts_with("export interface Customer {"));
//! assert!(ts.contains("  tags: string[];"));
//! ```
//!
//! # Feature Flags
//!
//! Backend flags (use `backend-*` prefix):
//! - `backend-c` - C structs with `#define` array capacities
//! - `backend-cpp` - C++ structs with `std::vector`
//! - `backend-java` - Java classes with `List`
//! - `backend-go` - Go structs with json tags
//! - `backend-rust` - Rust structs with serde
//! - `backend-typescript` - TypeScript interfaces
//! - `backend-javascript` - JavaScript classes with constructor defaults
//!
//! Language umbrella flags (convenience): `c`, `cpp`, `java`, `go`,
//! `rust-types`, `typescript`, `javascript`. All are on by default.

pub mod compile;
pub mod error;
pub mod input;
pub mod ir;
pub mod mapper;
pub mod naming;
pub mod output;
pub mod probe;
pub mod registry;
pub mod render;
pub mod traits;
pub mod traverse;

pub use compile::{CompileOptions, compile};
pub use error::CompileError;
pub use input::{ParseError, parse_json_schema, parse_json_schema_str};
pub use ir::{FieldSpec, NodeShape, PrimitiveKind, SchemaNode};
pub use registry::{
    backend_for_extension, backend_names, backends, backends_for_language, get_backend,
    register_backend,
};
pub use render::RenderUnit;
pub use traits::Backend;
pub use traverse::{TypeRecord, collect_type_records};
