use std::collections::HashMap;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use mocksmith_core::{Record, Value};

use crate::errors::GenerationError;

/// Declared cardinality of a relationship. Metadata only: resolution samples
/// the parent pool the same way for every kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    OneToOne,
    #[default]
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// A declared parent/child link between two tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub parent_table: String,
    pub child_table: String,
    pub parent_column: String,
    pub child_column: String,
    #[serde(default)]
    pub kind: RelationKind,
}

/// Tracks declared relationships and the parent value pools foreign keys are
/// resolved against.
///
/// Parent-before-child ordering is a caller responsibility: resolving against
/// a missing or empty pool yields `None`, not an error.
#[derive(Debug, Default)]
pub struct RelationshipEngine {
    relationships: HashMap<String, Relationship>,
    parent_pools: HashMap<String, Vec<Record>>,
}

impl RelationshipEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, relationship: Relationship) {
        self.relationships.insert(name.into(), relationship);
    }

    /// Replaces the parent pool for `table` with the given rows.
    pub fn store_parent_rows(&mut self, table: &str, rows: &[Record]) {
        self.parent_pools.insert(table.to_string(), rows.to_vec());
    }

    /// Resolves a foreign key by sampling the parent pool uniformly, with
    /// replacement across calls. Returns `None` when no parent rows exist;
    /// a row missing the parent column contributes a null value.
    pub fn foreign_key(
        &self,
        name: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Value>, GenerationError> {
        let relationship = self
            .relationships
            .get(name)
            .ok_or_else(|| GenerationError::RelationshipNotFound(name.to_string()))?;

        let Some(pool) = self.parent_pools.get(&relationship.parent_table) else {
            return Ok(None);
        };
        if pool.is_empty() {
            return Ok(None);
        }

        let row = &pool[rng.random_range(0..pool.len())];
        Ok(Some(
            row.get(&relationship.parent_column)
                .cloned()
                .unwrap_or(Value::Null),
        ))
    }

    pub fn relationships(&self) -> impl Iterator<Item = (&str, &Relationship)> {
        self.relationships
            .iter()
            .map(|(name, relationship)| (name.as_str(), relationship))
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.relationships.remove(name).is_some()
    }

    /// Drops all stored parent pools; registered relationships survive.
    pub fn clear_parent_rows(&mut self) {
        self.parent_pools.clear();
    }
}
