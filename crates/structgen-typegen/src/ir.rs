//! Schema model consumed by the compiler.
//!
//! A schema is a tree of [`SchemaNode`]s. A node is either object-shaped
//! (named fields) or an array root (a schema whose own shape is "array of X").
//! Fields are described by the closed [`FieldSpec`] union so every backend
//! can match them exhaustively.
//!
//! The tree is immutable input: the compiler only ever borrows it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed primitive vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Integer,
    /// Wide floating point.
    Number,
    /// Narrow floating point, where the target language has one.
    Decimal,
    Boolean,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::String,
        PrimitiveKind::Integer,
        PrimitiveKind::Number,
        PrimitiveKind::Decimal,
        PrimitiveKind::Boolean,
    ];

    /// Name as it appears in a schema document's `type` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::Boolean => "boolean",
        }
    }

    /// Look up a kind by its schema `type` name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Human-readable name; may contain several words.
    ///
    /// A nested node without a title is named after the field that owns it.
    pub title: Option<String>,
    /// Object-shaped or array-root.
    pub shape: NodeShape,
}

/// The two shapes a [`SchemaNode`] can take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeShape {
    /// Named fields. Iteration order is whatever the source produced; the
    /// compiler never relies on it.
    Object(IndexMap<String, FieldSpec>),
    /// The node itself is "array of X".
    ArrayRoot(Box<FieldSpec>),
}

/// The type of a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldSpec {
    Primitive(PrimitiveKind),
    /// An inline nested object.
    ObjectRef(SchemaNode),
    /// A homogeneous sequence.
    ArrayOf(Box<FieldSpec>),
}

impl SchemaNode {
    pub fn new(title: Option<String>, shape: NodeShape) -> Self {
        Self { title, shape }
    }

    /// A titled object node.
    pub fn object<K, I>(title: impl Into<String>, fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldSpec)>,
    {
        Self::new(Some(title.into()), NodeShape::Object(collect_fields(fields)))
    }

    /// An object node without a title; nested use takes the field's name.
    pub fn untitled<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldSpec)>,
    {
        Self::new(None, NodeShape::Object(collect_fields(fields)))
    }

    /// A titled array-root node.
    pub fn array_root(title: impl Into<String>, item: FieldSpec) -> Self {
        Self::new(Some(title.into()), NodeShape::ArrayRoot(Box::new(item)))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Named fields, for object-shaped nodes.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldSpec>> {
        match &self.shape {
            NodeShape::Object(fields) => Some(fields),
            NodeShape::ArrayRoot(_) => None,
        }
    }

    /// Element spec, for array-root nodes.
    pub fn item_spec(&self) -> Option<&FieldSpec> {
        match &self.shape {
            NodeShape::Object(_) => None,
            NodeShape::ArrayRoot(item) => Some(item),
        }
    }
}

fn collect_fields<K, I>(fields: I) -> IndexMap<String, FieldSpec>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, FieldSpec)>,
{
    fields
        .into_iter()
        .map(|(name, spec)| (name.into(), spec))
        .collect()
}

impl FieldSpec {
    pub fn string() -> Self {
        FieldSpec::Primitive(PrimitiveKind::String)
    }

    pub fn integer() -> Self {
        FieldSpec::Primitive(PrimitiveKind::Integer)
    }

    pub fn number() -> Self {
        FieldSpec::Primitive(PrimitiveKind::Number)
    }

    pub fn decimal() -> Self {
        FieldSpec::Primitive(PrimitiveKind::Decimal)
    }

    pub fn boolean() -> Self {
        FieldSpec::Primitive(PrimitiveKind::Boolean)
    }

    pub fn object(node: SchemaNode) -> Self {
        FieldSpec::ObjectRef(node)
    }

    pub fn array(element: FieldSpec) -> Self {
        FieldSpec::ArrayOf(Box::new(element))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, FieldSpec::Primitive(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, FieldSpec::ObjectRef(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, FieldSpec::ArrayOf(_))
    }

    /// Element type of an array field.
    pub fn element(&self) -> Option<&FieldSpec> {
        match self {
            FieldSpec::ArrayOf(element) => Some(element),
            _ => None,
        }
    }

    /// The nested object this field declares, looking through any arrays.
    pub fn nested(&self) -> Option<&SchemaNode> {
        match self {
            FieldSpec::Primitive(_) => None,
            FieldSpec::ObjectRef(node) => Some(node),
            FieldSpec::ArrayOf(element) => element.nested(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_schema_programmatically() {
        let order = SchemaNode::object(
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
        );

        assert_eq!(order.title(), Some("Order"));
        assert_eq!(order.fields().map(|f| f.len()), Some(3));
        assert!(order.item_spec().is_none());

        let fields = order.fields().unwrap();
        assert!(fields["id"].is_primitive());
        assert!(fields["tags"].is_array());
        assert_eq!(fields["tags"].element(), Some(&FieldSpec::string()));
        assert_eq!(
            fields["customer"].nested().and_then(SchemaNode::title),
            Some("Customer")
        );
    }

    #[test]
    fn nested_looks_through_arrays() {
        let line = SchemaNode::untitled([("sku", FieldSpec::string())]);
        let field = FieldSpec::array(FieldSpec::array(FieldSpec::object(line.clone())));
        assert_eq!(field.nested(), Some(&line));
        assert_eq!(FieldSpec::boolean().nested(), None);
    }

    #[test]
    fn array_root_exposes_item_spec() {
        let root = SchemaNode::array_root("Tags", FieldSpec::string());
        assert!(root.fields().is_none());
        assert_eq!(root.item_spec(), Some(&FieldSpec::string()));
    }

    #[test]
    fn primitive_names_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_name("null"), None);
        assert_eq!(PrimitiveKind::Decimal.to_string(), "decimal");
    }
}
