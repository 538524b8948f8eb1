//! Errors that abort a compilation.
//!
//! Every variant is fatal for the backend being compiled: no partial output is
//! ever returned. Paths use `$` for the root and `.field` / `[]` for nested
//! fields and array elements, e.g. `$.lines[].product`.

/// Error produced while compiling a schema for one backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A node needs a type name but has neither a title nor an owning field.
    #[error("schema node at `{path}` has no usable title to derive a type name from")]
    Naming { path: String },

    /// Two different field sets claim the same canonical type name.
    #[error(
        "type `{name}` at `{path}` conflicts with the declaration at `{first_path}`: field sets differ"
    )]
    NameCollision {
        name: String,
        path: String,
        first_path: String,
    },

    /// The active backend cannot express a field's kind or shape.
    #[error("backend `{backend}` cannot express {shape} (field `{field}` of `{owner}`)")]
    UnsupportedKind {
        backend: &'static str,
        owner: String,
        field: String,
        shape: String,
    },

    /// The active backend spells two distinct names as one identifier.
    #[error("backend `{backend}` spells both `{first}` and `{second}` as `{ident}` ({scope})")]
    IdentifierClash {
        backend: &'static str,
        ident: String,
        first: String,
        second: String,
        /// `type names`, or `fields of <Type>`.
        scope: String,
    },
}

impl CompileError {
    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::Naming { .. } => "naming",
            CompileError::NameCollision { .. } => "name-collision",
            CompileError::UnsupportedKind { .. } => "unsupported-kind",
            CompileError::IdentifierClash { .. } => "identifier-clash",
        }
    }
}
