//! C backend.
//!
//! Emits plain structs. C has no growable container, so every array field
//! becomes a fixed-capacity member sized by a `#define` constant named after
//! its owner and field (`ORDER_ITEMS_SIZE`).

use crate::error::CompileError;
use crate::ir::PrimitiveKind;
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::probe::Feature;
use crate::render::{RenderUnit, push_block};
use crate::traits::Backend;
use crate::traverse::FieldShape;
use std::fmt::Write;

/// Static instance of the C backend for registry.
pub static C_BACKEND: CBackend = CBackend;

/// C struct backend.
pub struct CBackend;

impl Backend for CBackend {
    fn name(&self) -> &'static str {
        "c"
    }

    fn language(&self) -> &'static str {
        "c"
    }

    fn extension(&self) -> &'static str {
        "h"
    }

    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "char*",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Number => "double",
            PrimitiveKind::Decimal => "float",
            PrimitiveKind::Boolean => "bool",
        }
    }

    fn array(
        &self,
        site: FieldSite<'_>,
        element_shape: &FieldShape,
        element: TypeToken,
        ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        // One capacity constant per field; nested arrays would need two.
        if element_shape.is_array() || element.capacity.is_some() {
            return Err(CompileError::UnsupportedKind {
                backend: self.name(),
                owner: site.owner.to_string(),
                field: site.field.to_string(),
                shape: FieldShape::Array(Box::new(element_shape.clone())).to_string(),
            });
        }
        let capacity = ctx.allocate_capacity(site);
        Ok(TypeToken::with_capacity(element.ty, capacity))
    }

    fn render(&self, unit: &RenderUnit) -> String {
        let mut out = String::new();

        let mut includes = String::from("#include <stdio.h>\n#include <stdlib.h>\n");
        if unit.uses(Feature::Boolean) {
            includes.push_str("#include <stdbool.h>\n");
        }
        push_block(&mut out, &includes);

        if !unit.size_constants.is_empty() {
            let mut defines = String::new();
            for constant in &unit.size_constants {
                writeln!(defines, "#define {} {}", constant.name, constant.value).unwrap();
            }
            push_block(&mut out, &defines);
        }

        if !unit.declarations.is_empty() {
            let mut typedefs = String::new();
            for decl in &unit.declarations {
                writeln!(typedefs, "typedef struct {0} {0};", decl.name).unwrap();
            }
            push_block(&mut out, &typedefs);
        }

        for decl in &unit.declarations {
            let mut block = String::new();
            writeln!(block, "struct {} {{", decl.name).unwrap();
            for field in &decl.fields {
                match &field.token.capacity {
                    Some(capacity) => {
                        writeln!(block, "    {} {}[{}];", field.token.ty, field.name, capacity)
                            .unwrap()
                    }
                    None => writeln!(block, "    {} {};", field.token.ty, field.name).unwrap(),
                }
            }
            block.push_str("};\n");
            push_block(&mut out, &block);
        }

        out
    }
}
