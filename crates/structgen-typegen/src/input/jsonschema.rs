//! JSON Schema to schema-tree parser.
//!
//! Reads the subset of JSON Schema the compiler understands: `properties`
//! objects, `items` arrays and the five primitive `type` names. Anything else
//! is rejected with the JSON path of the offending node.

use crate::ir::{FieldSpec, NodeShape, PrimitiveKind, SchemaNode};
use indexmap::IndexMap;
use serde_json::Value;

/// Parse a JSON Schema document into a schema tree.
pub fn parse_json_schema(input: &Value) -> Result<SchemaNode, ParseError> {
    let parser = Parser;
    parser.parse_root(input)
}

/// Decode JSON text and parse it as a schema document.
pub fn parse_json_schema_str(input: &str) -> Result<SchemaNode, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    parse_json_schema(&value)
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported schema construct at `{path}`: {reason}")]
    Unsupported { path: String, reason: String },
    #[error("unknown type `{ty}` at `{path}`")]
    UnknownType { path: String, ty: String },
}

fn unsupported(path: &str, reason: &str) -> ParseError {
    ParseError::Unsupported {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

struct Parser;

impl Parser {
    fn parse_root(&self, schema: &Value) -> Result<SchemaNode, ParseError> {
        if !schema.is_object() {
            return Err(unsupported("$", "schema must be a JSON object"));
        }

        if schema.get("properties").is_some() {
            return self.parse_node(schema, "$");
        }

        if let Some(items) = schema.get("items") {
            let item = self.parse_field(items, "$[]")?;
            return Ok(SchemaNode::new(
                title_of(schema),
                NodeShape::ArrayRoot(Box::new(item)),
            ));
        }

        Err(unsupported("$", "root has neither `properties` nor `items`"))
    }

    /// An object-shaped node: title plus `properties`.
    fn parse_node(&self, schema: &Value, path: &str) -> Result<SchemaNode, ParseError> {
        let mut fields = IndexMap::new();

        match schema.get("properties") {
            None => {}
            Some(Value::Object(props)) => {
                for (name, prop) in props {
                    let spec = self.parse_field(prop, &format!("{path}.{name}"))?;
                    fields.insert(name.clone(), spec);
                }
            }
            Some(_) => return Err(unsupported(path, "`properties` must be an object")),
        }

        Ok(SchemaNode::new(title_of(schema), NodeShape::Object(fields)))
    }

    fn parse_field(&self, schema: &Value, path: &str) -> Result<FieldSpec, ParseError> {
        if !schema.is_object() {
            return Err(unsupported(path, "property schema must be an object"));
        }

        match schema.get("type") {
            Some(Value::String(ty)) => self.parse_type_string(ty, schema, path),
            Some(_) => Err(unsupported(path, "`type` must be a string")),
            None if schema.get("properties").is_some() => {
                Ok(FieldSpec::object(self.parse_node(schema, path)?))
            }
            None => Err(unsupported(path, "property has no `type` or `properties`")),
        }
    }

    fn parse_type_string(
        &self,
        ty: &str,
        schema: &Value,
        path: &str,
    ) -> Result<FieldSpec, ParseError> {
        if let Some(kind) = PrimitiveKind::from_name(ty) {
            return Ok(FieldSpec::Primitive(kind));
        }

        match ty {
            "object" => Ok(FieldSpec::object(self.parse_node(schema, path)?)),
            "array" => {
                let items = schema
                    .get("items")
                    .ok_or_else(|| unsupported(path, "array has no `items`"))?;
                let element = self.parse_field(items, &format!("{path}[]"))?;
                Ok(FieldSpec::array(element))
            }
            other => Err(ParseError::UnknownType {
                path: path.to_string(),
                ty: other.to_string(),
            }),
        }
    }
}

fn title_of(schema: &Value) -> Option<String> {
    schema.get("title").and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_nested_object() {
        let schema = json!({
            "title": "Order Record",
            "properties": {
                "id": { "type": "integer" },
                "tags": { "type": "array", "items": { "type": "string" } },
                "customer": {
                    "type": "object",
                    "title": "Customer",
                    "properties": { "name": { "type": "string" } }
                }
            }
        });

        let node = parse_json_schema(&schema).unwrap();
        assert_eq!(node.title(), Some("Order Record"));

        let fields = node.fields().unwrap();
        assert_eq!(fields["id"], FieldSpec::integer());
        assert_eq!(fields["tags"], FieldSpec::array(FieldSpec::string()));
        assert_eq!(
            fields["customer"],
            FieldSpec::object(SchemaNode::object(
                "Customer",
                [("name", FieldSpec::string())]
            ))
        );
    }

    #[test]
    fn untitled_nested_object_without_type() {
        let schema = json!({
            "title": "Invoice",
            "properties": {
                "address": { "properties": { "city": { "type": "string" } } }
            }
        });
        let node = parse_json_schema(&schema).unwrap();
        assert_eq!(
            node.fields().unwrap()["address"],
            FieldSpec::object(SchemaNode::untitled([("city", FieldSpec::string())]))
        );
    }

    #[test]
    fn parse_array_root() {
        let schema = json!({
            "title": "Catalog",
            "type": "array",
            "items": { "type": "decimal" }
        });
        let node = parse_json_schema(&schema).unwrap();
        assert_eq!(node, SchemaNode::array_root("Catalog", FieldSpec::decimal()));
    }

    #[test]
    fn unknown_type_reports_path() {
        let schema = json!({
            "title": "Order",
            "properties": {
                "lines": { "type": "array", "items": { "type": "null" } }
            }
        });
        let err = parse_json_schema(&schema).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownType { ref path, ref ty } if path == "$.lines[]" && ty == "null"
        ));
    }

    #[test]
    fn array_without_items() {
        let schema = json!({
            "title": "Order",
            "properties": { "tags": { "type": "array" } }
        });
        let err = parse_json_schema(&schema).unwrap_err();
        assert!(matches!(err, ParseError::Unsupported { ref path, .. } if path == "$.tags"));
    }

    #[test]
    fn root_without_shape() {
        let err = parse_json_schema(&json!({ "title": "Empty" })).unwrap_err();
        assert!(matches!(err, ParseError::Unsupported { ref path, .. } if path == "$"));
        assert!(matches!(
            parse_json_schema(&json!([1, 2])).unwrap_err(),
            ParseError::Unsupported { .. }
        ));
    }

    #[test]
    fn invalid_json_text() {
        let err = parse_json_schema_str("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
