//! C++ backend.

use crate::error::CompileError;
use crate::ir::PrimitiveKind;
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::probe::Feature;
use crate::render::{RenderUnit, push_block};
use crate::traits::Backend;
use crate::traverse::FieldShape;
use std::fmt::Write;

/// Static instance of the C++ backend for registry.
pub static CPP_BACKEND: CppBackend = CppBackend;

/// C++ struct backend. Members are public by default, so the visibility
/// option has nothing to add.
pub struct CppBackend;

impl Backend for CppBackend {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn language(&self) -> &'static str {
        "cpp"
    }

    fn extension(&self) -> &'static str {
        "hpp"
    }

    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::String => "std::string",
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Number => "double",
            PrimitiveKind::Decimal => "float",
            PrimitiveKind::Boolean => "bool",
        }
    }

    fn array(
        &self,
        _site: FieldSite<'_>,
        _element_shape: &FieldShape,
        element: TypeToken,
        _ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        Ok(TypeToken::new(format!("std::vector<{}>", element.ty)))
    }

    fn render(&self, unit: &RenderUnit) -> String {
        let mut out = String::new();

        let mut includes = String::new();
        if unit.uses(Feature::String) {
            includes.push_str("#include <string>\n");
        }
        if unit.uses(Feature::Array) {
            includes.push_str("#include <vector>\n");
        }
        if !includes.is_empty() {
            push_block(&mut out, &includes);
        }

        for decl in &unit.declarations {
            let mut block = String::new();
            writeln!(block, "struct {} {{", decl.name).unwrap();
            for field in &decl.fields {
                writeln!(block, "    {} {};", field.token.ty, field.name).unwrap();
            }
            block.push_str("};\n");
            push_block(&mut out, &block);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{CompileOptions, compile};
    use crate::ir::{FieldSpec, SchemaNode};

    #[test]
    fn vectors_and_includes() {
        let root = SchemaNode::object(
            "Order",
            [
                ("id", FieldSpec::integer()),
                ("tags", FieldSpec::array(FieldSpec::string())),
            ],
        );
        let out = compile(&root, &CPP_BACKEND, &CompileOptions::default()).unwrap();
        assert_eq!(
            out,
            "#include <string>\n#include <vector>\n\n\
             struct Order {\n    int id;\n    std::vector<std::string> tags;\n};\n"
        );
    }

    #[test]
    fn no_includes_for_numeric_schema() {
        let root = SchemaNode::object("Point", [("x", FieldSpec::decimal())]);
        let out = compile(&root, &CPP_BACKEND, &CompileOptions::public()).unwrap();
        assert_eq!(out, "struct Point {\n    float x;\n};\n");
    }

    #[test]
    fn nested_vectors() {
        let root = SchemaNode::object(
            "Grid",
            [("cells", FieldSpec::array(FieldSpec::array(FieldSpec::number())))],
        );
        let out = compile(&root, &CPP_BACKEND, &CompileOptions::default()).unwrap();
        assert!(out.contains("    std::vector<std::vector<double>> cells;\n"));
    }
}
