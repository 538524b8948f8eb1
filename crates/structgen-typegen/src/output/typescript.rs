//! TypeScript backend.

use crate::error::CompileError;
use crate::ir::PrimitiveKind;
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::render::{RenderUnit, property_key, push_block};
use crate::traits::Backend;
use crate::traverse::FieldShape;
use std::fmt::Write;

/// Static instance of the TypeScript backend for registry.
pub static TYPESCRIPT_BACKEND: TypeScriptBackend = TypeScriptBackend;

/// TypeScript interface backend.
pub struct TypeScriptBackend;

impl Backend for TypeScriptBackend {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
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
            writeln!(block, "{export}interface {} {{", decl.name).unwrap();
            for field in &decl.fields {
                writeln!(block, "  {}: {};", property_key(&field.name), field.token.ty).unwrap();
            }
            block.push_str("}\n");
            push_block(&mut out, &block);
        }

        out
    }
}
