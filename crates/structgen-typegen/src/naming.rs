//! Canonical type names and the per-compilation name registry.

use crate::error::CompileError;
use crate::traverse::{RecordField, TypeRecord};
use std::collections::HashMap;

/// Derive the identifier a title is declared under.
///
/// The identifier is the first whitespace-delimited word, so a title such as
/// `"Customer Record v2"` declares `Customer`. `path` only feeds the error.
pub fn canonical_name(title: &str, path: &str) -> Result<String, CompileError> {
    title
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| CompileError::Naming {
            path: path.to_string(),
        })
}

/// Outcome of registering a type record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// First sighting; the record must be emitted.
    New,
    /// Same name and same fields seen before; already emitted.
    AlreadyDeclared,
}

#[derive(Debug)]
struct Entry {
    fingerprint: Vec<RecordField>,
    first_path: String,
}

/// Tracks every identifier declared during one compilation.
///
/// The fingerprint of a declaration is its sorted `(field name, field shape)`
/// list. A registry lives exactly as long as one call to
/// [`collect_type_records`](crate::traverse::collect_type_records).
#[derive(Debug, Default)]
pub struct NameRegistry {
    declared: HashMap<String, Entry>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration, or confirm it matches an earlier one.
    pub fn register(
        &mut self,
        record: &TypeRecord,
        path: &str,
    ) -> Result<Registration, CompileError> {
        match self.declared.get(&record.name) {
            Some(entry) if entry.fingerprint == record.fields => Ok(Registration::AlreadyDeclared),
            Some(entry) => Err(CompileError::NameCollision {
                name: record.name.clone(),
                path: path.to_string(),
                first_path: entry.first_path.clone(),
            }),
            None => {
                self.declared.insert(
                    record.name.clone(),
                    Entry {
                        fingerprint: record.fields.clone(),
                        first_path: path.to_string(),
                    },
                );
                Ok(Registration::New)
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declared.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
