//! Rust backend.
//!
//! Generates serde structs. Field identifiers are snake_cased and escaped
//! when they collide with a keyword; every field keeps its schema name through
//! `#[serde(rename)]`, so the generated types read and write the original
//! documents. Type names are UpperCamelCased.

use crate::error::CompileError;
use crate::ir::PrimitiveKind;
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::render::{RenderUnit, push_block};
use crate::traits::Backend;
use crate::traverse::FieldShape;
use heck::{ToSnakeCase, ToUpperCamelCase};
use std::fmt::Write;

/// Static instance of the Rust backend for registry.
pub static RUST_BACKEND: RustBackend = RustBackend;

/// Rust struct backend.
pub struct RustBackend;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Field identifier for a schema field name.
pub fn field_ident(name: &str) -> String {
    let ident = name.to_snake_case();
    if ident.is_empty() {
        return "field".to_string();
    }
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        return format!("{ident}_");
    }
    if KEYWORDS.contains(&ident.as_str()) {
        return format!("r#{ident}");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{ident}");
    }
    ident
}

/// Type identifier for a canonical type name, in UpperCamelCase.
pub fn type_ident(name: &str) -> String {
    let ident = name.to_upper_camel_case();
    if ident.is_empty() {
        return "Unnamed".to_string();
    }
    if ident == "Self" {
        return "Self_".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{ident}");
    }
    ident
}

impl Backend for RustBackend {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn language(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn supports_visibility(&self) -> bool {
        true
    }

    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "String",
            PrimitiveKind::Integer => "i64",
            PrimitiveKind::Number => "f64",
            PrimitiveKind::Decimal => "f32",
            PrimitiveKind::Boolean => "bool",
        }
    }

    fn type_ident(&self, name: &str, _public: bool) -> String {
        type_ident(name)
    }

    fn field_ident(&self, name: &str, _public: bool) -> String {
        field_ident(name)
    }

    fn array(
        &self,
        _site: FieldSite<'_>,
        _element_shape: &FieldShape,
        element: TypeToken,
        _ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        Ok(TypeToken::new(format!("Vec<{}>", element.ty)))
    }

    fn render(&self, unit: &RenderUnit) -> String {
        let mut out = String::new();
        let vis = if unit.public { "pub " } else { "" };

        push_block(&mut out, "use serde::{Deserialize, Serialize};\n");

        for decl in &unit.declarations {
            let mut block = String::new();
            block.push_str("#[derive(Debug, Serialize, Deserialize)]\n");
            writeln!(block, "{vis}struct {} {{", decl.name).unwrap();
            for field in &decl.fields {
                writeln!(block, "    #[serde(rename = \"{}\")]", field.name).unwrap();
                writeln!(block, "    {vis}{}: {},", field.ident, field.token.ty).unwrap();
            }
            block.push_str("}\n");
            push_block(&mut out, &block);
        }

        out
    }
}
