//! Traits for code generation backends.

use crate::error::CompileError;
use crate::ir::{PrimitiveKind, SchemaNode};
use crate::mapper::{FieldSite, MapContext, TypeToken};
use crate::probe::{self, FeatureSet};
use crate::render::RenderUnit;
use crate::traverse::{FieldShape, RecordField};

/// A code generation backend.
///
/// A backend is a type mapper plus a renderer for one target language. The
/// traversal is shared; a backend only decides how a field's shape is spelled
/// and how the ordered declarations are laid out.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use structgen_typegen::{Backend, CompileError, RenderUnit, register_backend};
/// use structgen_typegen::ir::PrimitiveKind;
/// use structgen_typegen::mapper::{FieldSite, MapContext, TypeToken};
/// use structgen_typegen::traverse::FieldShape;
///
/// struct KotlinBackend;
///
/// impl Backend for KotlinBackend {
///     fn name(&self) -> &'static str { "kotlin" }
///     fn language(&self) -> &'static str { "kotlin" }
///     fn extension(&self) -> &'static str { "kt" }
///     fn primitive(&self, kind: PrimitiveKind) -> &'static str { /* ... */ }
///     fn array(&self, _: FieldSite<'_>, _: &FieldShape, element: TypeToken, _: &mut MapContext)
///         -> Result<TypeToken, CompileError> {
///         Ok(TypeToken::new(format!("List<{}>", element.ty)))
///     }
///     fn render(&self, unit: &RenderUnit) -> String { /* ... */ }
/// }
///
/// // Register before first use
/// register_backend(&KotlinBackend);
/// ```
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "c", "rust", "typescript").
    fn name(&self) -> &'static str;

    /// Target language.
    fn language(&self) -> &'static str;

    /// File extension for generated code (e.g., "h", "rs", "ts").
    fn extension(&self) -> &'static str;

    /// Whether the language has a visibility or export modifier.
    fn supports_visibility(&self) -> bool {
        false
    }

    /// Token for a primitive kind.
    fn primitive(&self, kind: PrimitiveKind) -> &'static str;

    /// Token for a primitive used as an array element.
    fn element_primitive(&self, kind: PrimitiveKind) -> &'static str {
        self.primitive(kind)
    }

    /// Identifier a canonical type name is declared under.
    ///
    /// Must be applied consistently: [`Backend::object_ref`] uses it too, and
    /// [`compile`](crate::compile::compile) rejects two names that spell the
    /// same identifier.
    fn type_ident(&self, name: &str, _public: bool) -> String {
        name.to_string()
    }

    /// Identifier a schema field name is declared under.
    fn field_ident(&self, name: &str, _public: bool) -> String {
        name.to_string()
    }

    /// Token for a reference to a declared type.
    fn object_ref(&self, name: &str, ctx: &MapContext) -> String {
        self.type_ident(name, ctx.public())
    }

    /// Wrap a mapped element in the language's array type.
    ///
    /// Backends without a dynamic-length container allocate a capacity
    /// constant through `ctx` instead.
    fn array(
        &self,
        site: FieldSite<'_>,
        element_shape: &FieldShape,
        element: TypeToken,
        ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError>;

    /// Features that drive the preamble; scans the raw tree once.
    fn probe(&self, root: &SchemaNode) -> FeatureSet {
        probe::scan(root)
    }

    /// Map a record field to its token.
    fn map_field(
        &self,
        owner: &str,
        field: &RecordField,
        ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        let site = FieldSite {
            owner,
            field: &field.name,
        };
        self.map_shape(site, &field.shape, false, ctx)
    }

    /// Map a shape; `as_element` selects [`Backend::element_primitive`].
    fn map_shape(
        &self,
        site: FieldSite<'_>,
        shape: &FieldShape,
        as_element: bool,
        ctx: &mut MapContext,
    ) -> Result<TypeToken, CompileError> {
        match shape {
            FieldShape::Primitive(kind) if as_element => {
                Ok(TypeToken::new(self.element_primitive(*kind)))
            }
            FieldShape::Primitive(kind) => Ok(TypeToken::new(self.primitive(*kind))),
            FieldShape::Object(name) => Ok(TypeToken::new(self.object_ref(name, ctx))),
            FieldShape::Array(element) => {
                let inner = self.map_shape(site, element, true, ctx)?;
                self.array(site, element, inner, ctx)
            }
        }
    }

    /// Write the declarations, in order, with the backend's preamble.
    fn render(&self, unit: &RenderUnit) -> String;
}
