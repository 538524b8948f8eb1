//! Input handed to a backend's renderer.

use crate::mapper::{SizeConstant, TypeToken};
use crate::probe::{Feature, FeatureSet};
use crate::traverse::FieldShape;

/// Everything a backend needs to write one output file.
#[derive(Debug, Clone)]
pub struct RenderUnit {
    /// Types in emission order: dependencies first.
    pub declarations: Vec<Declaration>,
    /// Result of the whole-tree feature probe.
    pub features: FeatureSet,
    /// Capacity constants allocated while mapping, sorted by name.
    pub size_constants: Vec<SizeConstant>,
    /// Whether the visibility modifier applies (already false for backends
    /// without one).
    pub public: bool,
    /// Package or module name, for backends that declare one.
    pub package: String,
}

impl RenderUnit {
    pub fn uses(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

/// A type declaration with mapped field tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Type identifier as the backend spells it.
    pub name: String,
    pub fields: Vec<DeclaredField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredField {
    /// Field name as written in the schema.
    pub name: String,
    /// Field identifier as the backend spells it; unique within its type.
    pub ident: String,
    pub shape: FieldShape,
    pub token: TypeToken,
}

/// Append a block, separated from whatever precedes it by one blank line.
pub(crate) fn push_block(out: &mut String, block: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(block);
}

/// Upper-case the first character.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` can be written as a bare JavaScript property name.
#[cfg(any(feature = "backend-typescript", feature = "backend-javascript"))]
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Property key for an object type member, quoted when needed.
#[cfg(feature = "backend-typescript")]
pub(crate) fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("{name:?}")
    }
}
