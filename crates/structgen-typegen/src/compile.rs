//! The compile pipeline: probe, traverse, map, render.

use crate::error::CompileError;
use crate::ir::SchemaNode;
use crate::mapper::MapContext;
use crate::render::{Declaration, DeclaredField, RenderUnit};
use crate::traits::Backend;
use crate::traverse::{TypeRecord, collect_type_records};
use std::collections::HashMap;

/// Options for one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Mark every type and field with the backend's visibility modifier.
    /// Ignored by backends that have none.
    pub public_visibility: bool,
    /// Package name for backends that declare one (Go).
    pub package: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            public_visibility: false,
            package: "main".to_string(),
        }
    }
}

impl CompileOptions {
    pub fn public() -> Self {
        Self {
            public_visibility: true,
            ..Default::default()
        }
    }
}

/// Compile a schema into source code for one backend.
///
/// Every call starts with a fresh name registry and size-constant table, so
/// compiling the same schema for several backends never shares state.
pub fn compile(
    schema: &SchemaNode,
    backend: &dyn Backend,
    options: &CompileOptions,
) -> Result<String, CompileError> {
    let span = tracing::debug_span!("compile", backend = backend.name());
    let _guard = span.enter();

    let features = backend.probe(schema);
    let records = collect_type_records(schema)?;

    let public = options.public_visibility && backend.supports_visibility();
    if options.public_visibility && !public {
        tracing::debug!("backend has no visibility modifier; ignoring public option");
    }

    let mut type_idents = IdentScope::new(backend, "type names".to_string());
    for record in &records {
        type_idents.claim(backend.type_ident(&record.name, public), &record.name)?;
    }

    let mut ctx = MapContext::new(public);
    let declarations = records
        .iter()
        .map(|record| declare(backend, record, &mut ctx))
        .collect::<Result<Vec<_>, _>>()?;

    let unit = RenderUnit {
        declarations,
        features,
        size_constants: ctx.into_size_constants(),
        public,
        package: options.package.clone(),
    };
    let output = backend.render(&unit);
    tracing::debug!(types = unit.declarations.len(), bytes = output.len(), "compiled");
    Ok(output)
}

/// Identifiers already spelled in one namespace, mapped to the name that
/// claimed them first.
struct IdentScope<'a> {
    backend: &'a dyn Backend,
    scope: String,
    claimed: HashMap<String, String>,
}

impl<'a> IdentScope<'a> {
    fn new(backend: &'a dyn Backend, scope: String) -> Self {
        Self {
            backend,
            scope,
            claimed: HashMap::new(),
        }
    }

    fn claim(&mut self, ident: String, name: &str) -> Result<String, CompileError> {
        match self.claimed.get(&ident) {
            Some(first) if first != name => Err(CompileError::IdentifierClash {
                backend: self.backend.name(),
                ident,
                first: first.clone(),
                second: name.to_string(),
                scope: self.scope.clone(),
            }),
            Some(_) => Ok(ident),
            None => {
                self.claimed.insert(ident.clone(), name.to_string());
                Ok(ident)
            }
        }
    }
}

fn declare(
    backend: &dyn Backend,
    record: &TypeRecord,
    ctx: &mut MapContext,
) -> Result<Declaration, CompileError> {
    let public = ctx.public();
    let mut field_idents = IdentScope::new(backend, format!("fields of `{}`", record.name));
    let fields = record
        .fields
        .iter()
        .map(|field| -> Result<DeclaredField, CompileError> {
            let ident = field_idents.claim(backend.field_ident(&field.name, public), &field.name)?;
            Ok(DeclaredField {
                name: field.name.clone(),
                ident,
                shape: field.shape.clone(),
                token: backend.map_field(&record.name, field, ctx)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Declaration {
        name: backend.type_ident(&record.name, public),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{FieldSpec, PrimitiveKind};
    use crate::mapper::{FieldSite, TypeToken};
    use crate::traverse::FieldShape;
    use std::fmt::Write;

    /// Minimal backend: `name: token` lines, `[]T` arrays, `pub` visibility.
    struct Plain {
        visibility: bool,
    }

    impl Backend for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn language(&self) -> &'static str {
            "plain"
        }

        fn extension(&self) -> &'static str {
            "txt"
        }

        fn supports_visibility(&self) -> bool {
            self.visibility
        }

        fn primitive(&self, kind: PrimitiveKind) -> &'static str {
            kind.as_str()
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
            for decl in &unit.declarations {
                let vis = if unit.public { "pub " } else { "" };
                writeln!(out, "{vis}{}", decl.name).unwrap();
                for field in &decl.fields {
                    writeln!(out, "  {}: {}", field.name, field.token.ty).unwrap();
                }
            }
            out
        }
    }

    fn order() -> SchemaNode {
        SchemaNode::object(
            "Order",
            [
                ("id", FieldSpec::integer()),
                ("tags", FieldSpec::array(FieldSpec::string())),
                (
                    "customer",
                    FieldSpec::object(SchemaNode::object(
                        "Customer",
                        [("name", FieldSpec::string())],
                    )),
                ),
            ],
        )
    }

    #[test]
    fn emits_dependencies_first_with_mapped_tokens() {
        let out = compile(
            &order(),
            &Plain { visibility: true },
            &CompileOptions::default(),
        )
        .unwrap();
        assert_eq!(
            out,
            "Customer\n  name: string\nOrder\n  customer: Customer\n  id: integer\n  tags: []string\n"
        );
    }

    #[test]
    fn public_only_when_backend_supports_it() {
        let with = compile(
            &order(),
            &Plain { visibility: true },
            &CompileOptions::public(),
        )
        .unwrap();
        assert!(with.starts_with("pub Customer\n"));

        let without = compile(
            &order(),
            &Plain { visibility: false },
            &CompileOptions::public(),
        )
        .unwrap();
        assert!(without.starts_with("Customer\n"));
    }

    #[test]
    fn repeated_compilations_are_identical() {
        let backend = Plain { visibility: false };
        let first = compile(&order(), &backend, &CompileOptions::default()).unwrap();
        let second = compile(&order(), &backend, &CompileOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn errors_abort_without_output() {
        let root = SchemaNode::untitled([("id", FieldSpec::integer())]);
        let err = compile(
            &root,
            &Plain { visibility: false },
            &CompileOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "naming");
    }
}
