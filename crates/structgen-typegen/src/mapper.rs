//! Per-compilation mapping state and the tokens backends produce.

use serde::Serialize;
use std::collections::BTreeMap;

/// Capacity given to every fixed-size array.
pub const DEFAULT_ARRAY_CAPACITY: usize = 50;

/// The target-language spelling of a field's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeToken {
    /// Type as written before the field name (or after, depending on syntax).
    pub ty: String,
    /// Size constant naming the capacity of a fixed-size array field.
    pub capacity: Option<String>,
}

impl TypeToken {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            capacity: None,
        }
    }

    pub fn with_capacity(ty: impl Into<String>, capacity: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            capacity: Some(capacity.into()),
        }
    }
}

/// The field being mapped, for size constants and error reports.
#[derive(Debug, Clone, Copy)]
pub struct FieldSite<'a> {
    pub owner: &'a str,
    pub field: &'a str,
}

/// A `#define`-style capacity constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeConstant {
    pub name: String,
    pub value: usize,
}

/// Name of the capacity constant for `owner.field`.
///
/// Upper-casing is lossy: `order.items` and `Order.items` share
/// `ORDER_ITEMS_SIZE`. Every constant has the same value, so sharing is safe.
pub fn size_constant_name(owner: &str, field: &str) -> String {
    format!("{}_{}_SIZE", owner.to_uppercase(), field.to_uppercase())
}

/// Mutable state shared by all field mappings of one compilation.
///
/// Created fresh for every call to [`compile`](crate::compile::compile) and
/// consumed when the render unit is built.
#[derive(Debug, Default)]
pub struct MapContext {
    public: bool,
    /// Constant name to (capacity, first `owner.field` that claimed it).
    size_constants: BTreeMap<String, (usize, String)>,
}

impl MapContext {
    pub fn new(public: bool) -> Self {
        Self {
            public,
            size_constants: BTreeMap::new(),
        }
    }

    /// Whether declarations carry the backend's visibility modifier.
    pub fn public(&self) -> bool {
        self.public
    }

    /// Register the capacity constant for a fixed-size array field and
    /// return its name. Registering the same site twice is a no-op.
    pub fn allocate_capacity(&mut self, site: FieldSite<'_>) -> String {
        let name = size_constant_name(site.owner, site.field);
        let origin = format!("{}.{}", site.owner, site.field);
        match self.size_constants.get(&name) {
            Some((_, first)) if *first != origin => {
                tracing::debug!(constant = %name, first = %first, site = %origin, "size constant shared");
            }
            Some(_) => {}
            None => {
                tracing::debug!(constant = %name, capacity = DEFAULT_ARRAY_CAPACITY, "size constant");
                self.size_constants
                    .insert(name.clone(), (DEFAULT_ARRAY_CAPACITY, origin));
            }
        }
        name
    }

    /// Size constants allocated so far, sorted by name.
    pub fn into_size_constants(self) -> Vec<SizeConstant> {
        self.size_constants
            .into_iter()
            .map(|(name, (value, _))| SizeConstant { name, value })
            .collect()
    }
}
