//! Go backend.
//!
//! Generates structs with `json` tags carrying the schema's field names. Go
//! exports identifiers by capitalization, so the public option capitalizes
//! type names and converts field names to UpperCamelCase; the tags keep the
//! wire names either way.

use crate::error::CompileError;
use crate::ir::PrimitiveKind;
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::render::{RenderUnit, capitalize, push_block};
use crate::traits::Backend;
use crate::traverse::FieldShape;
use heck::ToUpperCamelCase;
use std::fmt::Write;

/// Static instance of the Go backend for registry.
pub static GO_BACKEND: GoBackend = GoBackend;

/// Go struct backend.
pub struct GoBackend;

impl Backend for GoBackend {
    fn name(&self) -> &'static str {
        "go"
    }

    fn language(&self) -> &'static str {
        "go"
    }

    fn extension(&self) -> &'static str {
        "go"
    }

    fn supports_visibility(&self) -> bool {
        true
    }

    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "int64",
            PrimitiveKind::Number => "float64",
            PrimitiveKind::Decimal => "float32",
            PrimitiveKind::Boolean => "bool",
        }
    }

    fn type_ident(&self, name: &str, public: bool) -> String {
        if public {
            capitalize(name)
        } else {
            name.to_string()
        }
    }

    fn field_ident(&self, name: &str, public: bool) -> String {
        if public {
            name.to_upper_camel_case()
        } else {
            name.to_string()
        }
    }

    fn array(
        &self,
        _site: FieldSite<'_>,
        _element_shape: &FieldShape,
        element: TypeToken,
        _ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        Ok(TypeToken::new(format!("[]{}", element.ty)))
    }

    fn render(&self, unit: &RenderUnit) -> String {
        let mut out = String::new();
        push_block(&mut out, &format!("package {}\n", unit.package));

        for decl in &unit.declarations {
            let mut block = String::new();
            writeln!(block, "type {} struct {{", decl.name).unwrap();
            for field in &decl.fields {
                writeln!(
                    block,
                    "\t{} {} `json:\"{}\"`",
                    field.ident,
                    field.token.ty,
                    field.name
                )
                .unwrap();
            }
            block.push_str("}\n");
            push_block(&mut out, &block);
        }

        out
    }
}
