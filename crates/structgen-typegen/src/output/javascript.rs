//! JavaScript backend.
//!
//! JavaScript has no type declarations, so each type becomes a class whose
//! constructor initializes every field to an empty value of its kind. The
//! mapped type is kept in a trailing comment.

use crate::error::CompileError;
use crate::ir::PrimitiveKind;
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::render::{DeclaredField, RenderUnit, is_identifier, push_block};
use crate::traits::Backend;
use crate::traverse::FieldShape;
use std::fmt::Write;

/// Static instance of the JavaScript backend for registry.
pub static JAVASCRIPT_BACKEND: JavaScriptBackend = JavaScriptBackend;

/// JavaScript class backend.
pub struct JavaScriptBackend;

fn default_value(field: &DeclaredField) -> String {
    match &field.shape {
        FieldShape::Primitive(PrimitiveKind::String) => "''".to_string(),
        FieldShape::Primitive(
            PrimitiveKind::Integer | PrimitiveKind::Number | PrimitiveKind::Decimal,
        ) => "0".to_string(),
        FieldShape::Primitive(PrimitiveKind::Boolean) => "false".to_string(),
        FieldShape::Array(_) => "[]".to_string(),
        FieldShape::Object(_) => format!("new {}()", field.token.ty),
    }
}

fn member(name: &str) -> String {
    if is_identifier(name) {
        format!("this.{name}")
    } else {
        format!("this[{name:?}]")
    }
}

impl Backend for JavaScriptBackend {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn language(&self) -> &'static str {
        "javascript"
    }

    fn extension(&self) -> &'static str {
        "js"
    }

    fn supports_visibility(&self) -> bool {
        true
    }

    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer | PrimitiveKind::Number | PrimitiveKind::Decimal => "number",
            PrimitiveKind::Boolean => "boolean",
        }
    }

    fn array(
        &self,
        _site: FieldSite<'_>,
        _element_shape: &FieldShape,
        element: TypeToken,
        _ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        Ok(TypeToken::new(format!("{}[]", element.ty)))
    }

    fn render(&self, unit: &RenderUnit) -> String {
        let mut out = String::new();
        let export = if unit.public { "export " } else { "" };

        for decl in &unit.declarations {
            let mut block = String::new();
            writeln!(block, "{export}class {} {{", decl.name).unwrap();
            block.push_str("  constructor() {\n");
            for field in &decl.fields {
                writeln!(
                    block,
                    "    {} = {}; // {}",
                    member(&field.name),
                    default_value(field),
                    field.token.ty
                )
                .unwrap();
            }
            block.push_str("  }\n}\n");
            push_block(&mut out, &block);
        }

        out
    }
}
