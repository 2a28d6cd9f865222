use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::SemanticType;

/// A named tabular schema: the input contract of the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TableSchema {
    /// Table name; keys the parent value pool for relationship resolution.
    pub name: String,
    /// Columns in declaration order; names must be unique.
    pub columns: Vec<Column>,
}

/// A named, typed slot in the target schema.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    /// Semantic type tag selecting the synthesis rule.
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ValidationConstraints>,
}

impl Column {
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            constraints: None,
        }
    }

    pub fn with_constraints(mut self, constraints: ValidationConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }
}

/// Validation constraints attached to a column.
///
/// Interpretation depends on the synthesized value's kind: length/pattern
/// constraints apply to strings, `min`/`max` to numbers, and constraints
/// irrelevant to a type are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ValidationConstraints {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Regular expression the value must match; compile-checked before
    /// generation starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Free-text description of an external validation rule; not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_validation: Option<String>,
}
