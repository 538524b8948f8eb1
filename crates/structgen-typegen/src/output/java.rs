//! Java backend.
//!
//! One class per declared type with plain fields. Array fields become
//! `List<T>`; generics cannot hold primitives, so array elements use the
//! boxed type.

use crate::error::CompileError;
use crate::ir::PrimitiveKind;
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::probe::Feature;
use crate::render::{RenderUnit, push_block};
use crate::traits::Backend;
use crate::traverse::FieldShape;
use std::fmt::Write;

/// Static instance of the Java backend for registry.
pub static JAVA_BACKEND: JavaBackend = JavaBackend;

/// Java class backend.
pub struct JavaBackend;

impl Backend for JavaBackend {
    fn name(&self) -> &'static str {
        "java"
    }

    fn language(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn supports_visibility(&self) -> bool {
        true
    }

    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "String",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Number => "double",
            PrimitiveKind::Decimal => "float",
            PrimitiveKind::Boolean => "boolean",
        }
    }

    fn element_primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "String",
            PrimitiveKind::Integer => "Integer",
            PrimitiveKind::Number => "Double",
            PrimitiveKind::Decimal => "Float",
            PrimitiveKind::Boolean => "Boolean",
        }
    }

    fn array(
        &self,
        _site: FieldSite<'_>,
        _element_shape: &FieldShape,
        element: TypeToken,
        _ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        Ok(TypeToken::new(format!("List<{}>", element.ty)))
    }

    fn render(&self, unit: &RenderUnit) -> String {
        let mut out = String::new();
        let vis = if unit.public { "public " } else { "" };

        if unit.uses(Feature::Array) {
            push_block(&mut out, "import java.util.List;\n");
        }

        for decl in &unit.declarations {
            let mut block = String::new();
            writeln!(block, "{vis}class {} {{", decl.name).unwrap();
            for field in &decl.fields {
                writeln!(block, "    {vis}{} {};", field.token.ty, field.name).unwrap();
            }
            block.push_str("}\n");
            push_block(&mut out, &block);
        }

        out
    }
}
