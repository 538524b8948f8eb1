//! Dependency-first traversal of the schema tree.
//!
//! [`collect_type_records`] walks the tree post-order: every nested object a
//! node refers to is recorded before the node itself, so a backend whose
//! value types cannot be forward-declared can emit the records in sequence.
//! Fields are visited and recorded in lexicographic (byte) order of their
//! names, which makes the output independent of the input's map order.

use crate::error::CompileError;
use crate::ir::{FieldSpec, NodeShape, PrimitiveKind, SchemaNode};
use crate::naming::{NameRegistry, Registration, canonical_name};
use serde::Serialize;
use std::fmt;

/// Name of the synthetic field an array-root node is declared with.
pub const ITEMS_FIELD: &str = "items";

/// A field's type with nested objects resolved to their canonical names.
///
/// This is also the unit of a declaration's fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum FieldShape {
    Primitive(PrimitiveKind),
    /// Reference to a declared type.
    Object(String),
    Array(Box<FieldShape>),
}

impl FieldShape {
    pub fn is_array(&self) -> bool {
        matches!(self, FieldShape::Array(_))
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldShape::Primitive(kind) => write!(f, "{kind}"),
            FieldShape::Object(name) => write!(f, "object {name}"),
            FieldShape::Array(element) => write!(f, "array<{element}>"),
        }
    }
}

/// One field of a [`TypeRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecordField {
    pub name: String,
    pub shape: FieldShape,
}

/// A type ready to be declared: its identifier and its sorted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRecord {
    pub name: String,
    pub fields: Vec<RecordField>,
}

/// Collect every type the schema declares, children before parents.
///
/// Nested objects repeated with identical fields are recorded once; a repeat
/// with different fields fails with [`CompileError::NameCollision`]. The root
/// has no owning field, so it must carry a title.
pub fn collect_type_records(root: &SchemaNode) -> Result<Vec<TypeRecord>, CompileError> {
    let mut walker = Walker::default();
    walker.visit(root, None, "$")?;
    Ok(walker.records)
}

#[derive(Default)]
struct Walker {
    registry: NameRegistry,
    records: Vec<TypeRecord>,
}

impl Walker {
    /// Record `node` (after its dependencies) and return its identifier.
    fn visit(
        &mut self,
        node: &SchemaNode,
        owning_field: Option<&str>,
        path: &str,
    ) -> Result<String, CompileError> {
        let title = node
            .title()
            .filter(|t| !t.trim().is_empty())
            .or(owning_field)
            .unwrap_or_default();
        let name = canonical_name(title, path)?;

        let fields = match &node.shape {
            NodeShape::Object(fields) => {
                let mut sorted: Vec<(&String, &FieldSpec)> = fields.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(b.0));

                let mut record_fields = Vec::with_capacity(sorted.len());
                for (field_name, spec) in sorted {
                    let field_path = format!("{path}.{field_name}");
                    let shape = self.resolve(field_name, spec, &field_path)?;
                    record_fields.push(RecordField {
                        name: field_name.clone(),
                        shape,
                    });
                }
                record_fields
            }
            NodeShape::ArrayRoot(item) => {
                let item_path = format!("{path}[]");
                let element = self.resolve(ITEMS_FIELD, item, &item_path)?;
                vec![RecordField {
                    name: ITEMS_FIELD.to_string(),
                    shape: FieldShape::Array(Box::new(element)),
                }]
            }
        };

        let record = TypeRecord {
            name: name.clone(),
            fields,
        };
        match self.registry.register(&record, path)? {
            Registration::New => {
                tracing::debug!(name = %record.name, path, fields = record.fields.len(), "type record");
                self.records.push(record);
            }
            Registration::AlreadyDeclared => {
                tracing::debug!(name = %record.name, path, "already declared, skipping");
            }
        }
        Ok(name)
    }

    fn resolve(
        &mut self,
        field_name: &str,
        spec: &FieldSpec,
        path: &str,
    ) -> Result<FieldShape, CompileError> {
        match spec {
            FieldSpec::Primitive(kind) => Ok(FieldShape::Primitive(*kind)),
            FieldSpec::ObjectRef(nested) => {
                let name = self.visit(nested, Some(field_name), path)?;
                Ok(FieldShape::Object(name))
            }
            FieldSpec::ArrayOf(element) => {
                let element_path = format!("{path}[]");
                let element = self.resolve(field_name, element, &element_path)?;
                Ok(FieldShape::Array(Box::new(element)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[TypeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn field_names(record: &TypeRecord) -> Vec<&str> {
        record.fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn order() -> SchemaNode {
        SchemaNode::object(
            "Order",
            [
                ("tags", FieldSpec::array(FieldSpec::string())),
                ("id", FieldSpec::integer()),
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
    fn children_before_parent_fields_sorted() {
        let records = collect_type_records(&order()).unwrap();
        assert_eq!(names(&records), ["Customer", "Order"]);
        assert_eq!(field_names(&records[1]), ["customer", "id", "tags"]);
        assert_eq!(
            records[1].fields[0].shape,
            FieldShape::Object("Customer".into())
        );
        assert_eq!(
            records[1].fields[2].shape,
            FieldShape::Array(Box::new(FieldShape::Primitive(PrimitiveKind::String)))
        );
    }

    #[test]
    fn untitled_nested_takes_field_name() {
        let root = SchemaNode::object(
            "Invoice",
            [(
                "address",
                FieldSpec::object(SchemaNode::untitled([("city", FieldSpec::string())])),
            )],
        );
        let records = collect_type_records(&root).unwrap();
        assert_eq!(names(&records), ["address", "Invoice"]);
    }

    #[test]
    fn multi_word_titles_truncate() {
        let root = SchemaNode::object("Customer Record v2", [("id", FieldSpec::integer())]);
        let records = collect_type_records(&root).unwrap();
        assert_eq!(names(&records), ["Customer"]);
    }

    #[test]
    fn array_of_objects_is_discovered() {
        let line = SchemaNode::object(
            "Line Item",
            [("sku", FieldSpec::string()), ("qty", FieldSpec::integer())],
        );
        let root = SchemaNode::object(
            "Order",
            [("lines", FieldSpec::array(FieldSpec::object(line)))],
        );
        let records = collect_type_records(&root).unwrap();
        assert_eq!(names(&records), ["Line", "Order"]);
        assert_eq!(field_names(&records[0]), ["qty", "sku"]);
        assert_eq!(
            records[1].fields[0].shape,
            FieldShape::Array(Box::new(FieldShape::Object("Line".into())))
        );
    }

    #[test]
    fn array_root_has_single_items_field() {
        let root = SchemaNode::array_root(
            "Catalog",
            FieldSpec::object(SchemaNode::object(
                "Product",
                [("price", FieldSpec::number())],
            )),
        );
        let records = collect_type_records(&root).unwrap();
        assert_eq!(names(&records), ["Product", "Catalog"]);
        assert_eq!(field_names(&records[1]), [ITEMS_FIELD]);
        assert_eq!(
            records[1].fields[0].shape,
            FieldShape::Array(Box::new(FieldShape::Object("Product".into())))
        );
    }

    #[test]
    fn untitled_array_root_item_named_items() {
        let root = SchemaNode::array_root(
            "Batch",
            FieldSpec::object(SchemaNode::untitled([("id", FieldSpec::integer())])),
        );
        let records = collect_type_records(&root).unwrap();
        assert_eq!(names(&records), ["items", "Batch"]);
    }

    #[test]
    fn identical_siblings_declared_once() {
        let address = || {
            FieldSpec::object(SchemaNode::object(
                "Address",
                [("city", FieldSpec::string()), ("zip", FieldSpec::string())],
            ))
        };
        let root = SchemaNode::object("Shipment", [("from", address()), ("to", address())]);
        let records = collect_type_records(&root).unwrap();
        assert_eq!(names(&records), ["Address", "Shipment"]);
        assert_eq!(
            records[1].fields[0].shape,
            records[1].fields[1].shape,
            "both fields reference the single declaration"
        );
    }

    #[test]
    fn differing_siblings_collide() {
        let root = SchemaNode::object(
            "Shipment",
            [
                (
                    "from",
                    FieldSpec::object(SchemaNode::object(
                        "Address",
                        [("city", FieldSpec::string())],
                    )),
                ),
                (
                    "to",
                    FieldSpec::object(SchemaNode::object(
                        "Address",
                        [("zip", FieldSpec::string())],
                    )),
                ),
            ],
        );
        let err = collect_type_records(&root).unwrap_err();
        assert_eq!(
            err,
            CompileError::NameCollision {
                name: "Address".into(),
                path: "$.to".into(),
                first_path: "$.from".into(),
            }
        );
    }

    #[test]
    fn self_named_nested_node_collides_with_parent() {
        let root = SchemaNode::object(
            "Category",
            [
                ("name", FieldSpec::string()),
                (
                    "parent",
                    FieldSpec::object(SchemaNode::object(
                        "Category",
                        [("name", FieldSpec::string())],
                    )),
                ),
            ],
        );
        let err = collect_type_records(&root).unwrap_err();
        assert!(matches!(err, CompileError::NameCollision { ref name, .. } if name == "Category"));
    }

    #[test]
    fn untitled_root_is_a_naming_error() {
        let root = SchemaNode::untitled([("id", FieldSpec::integer())]);
        assert_eq!(
            collect_type_records(&root).unwrap_err(),
            CompileError::Naming { path: "$".into() }
        );
    }

    #[test]
    fn blank_nested_title_falls_back_to_field_name() {
        let root = SchemaNode::object(
            "Order",
            [
                (
                    "lines",
                    FieldSpec::array(FieldSpec::object(SchemaNode::object(
                        " ",
                        [("sku", FieldSpec::string())],
                    ))),
                ),
                (
                    "customer",
                    FieldSpec::object(SchemaNode::object("", [("name", FieldSpec::string())])),
                ),
            ],
        );
        let records = collect_type_records(&root).unwrap();
        assert_eq!(names(&records), ["customer", "lines", "Order"]);
    }

    #[test]
    fn blank_root_title_is_a_naming_error() {
        let root = SchemaNode::object("  ", [("id", FieldSpec::integer())]);
        assert_eq!(
            collect_type_records(&root).unwrap_err(),
            CompileError::Naming { path: "$".into() }
        );
    }

    #[test]
    fn blank_title_and_blank_field_name_is_a_naming_error() {
        let root = SchemaNode::object(
            "Order",
            [(
                "",
                FieldSpec::object(SchemaNode::object(" ", [("sku", FieldSpec::string())])),
            )],
        );
        assert_eq!(
            collect_type_records(&root).unwrap_err(),
            CompileError::Naming { path: "$.".into() }
        );
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = SchemaNode::object(
            "Point",
            [("x", FieldSpec::number()), ("y", FieldSpec::number())],
        );
        let backward = SchemaNode::object(
            "Point",
            [("y", FieldSpec::number()), ("x", FieldSpec::number())],
        );
        assert_eq!(
            collect_type_records(&forward).unwrap(),
            collect_type_records(&backward).unwrap()
        );
    }

    #[test]
    fn shape_display() {
        let shape = FieldShape::Array(Box::new(FieldShape::Array(Box::new(
            FieldShape::Object("Cell".into()),
        ))));
        assert_eq!(shape.to_string(), "array<array<object Cell>>");
    }
}
