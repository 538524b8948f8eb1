//! Whole-tree feature probe.
//!
//! Backends decide their preamble (includes, imports) from the set of
//! features the raw schema uses. The probe inspects every field in the tree,
//! including repeated nested objects that deduplication will later drop.

use crate::ir::{FieldSpec, NodeShape, PrimitiveKind, SchemaNode};
use std::collections::BTreeSet;

/// A cross-cutting property of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    String,
    Integer,
    Number,
    Decimal,
    Boolean,
    Array,
    Object,
}

impl From<PrimitiveKind> for Feature {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::String => Feature::String,
            PrimitiveKind::Integer => Feature::Integer,
            PrimitiveKind::Number => Feature::Number,
            PrimitiveKind::Decimal => Feature::Decimal,
            PrimitiveKind::Boolean => Feature::Boolean,
        }
    }
}

pub type FeatureSet = BTreeSet<Feature>;

/// Scan the tree once and collect every feature it uses.
pub fn scan(root: &SchemaNode) -> FeatureSet {
    let mut features = FeatureSet::new();
    scan_node(root, &mut features);
    features
}

fn scan_node(node: &SchemaNode, features: &mut FeatureSet) {
    match &node.shape {
        NodeShape::Object(fields) => {
            for spec in fields.values() {
                scan_field(spec, features);
            }
        }
        // The synthetic `items` field is an array.
        NodeShape::ArrayRoot(item) => {
            features.insert(Feature::Array);
            scan_field(item, features);
        }
    }
}

fn scan_field(spec: &FieldSpec, features: &mut FeatureSet) {
    match spec {
        FieldSpec::Primitive(kind) => {
            features.insert((*kind).into());
        }
        FieldSpec::ObjectRef(nested) => {
            features.insert(Feature::Object);
            scan_node(nested, features);
        }
        FieldSpec::ArrayOf(element) => {
            features.insert(Feature::Array);
            scan_field(element, features);
        }
    }
}
