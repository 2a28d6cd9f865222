//! Deterministic synthetic record generation for Mocksmith.
//!
//! This crate turns a table schema into ordered records with
//! constraint-aware, seed-reproducible values, plus caller-owned engines
//! for sequences, custom formats, and cross-table relationships.

pub mod engine;
pub mod errors;
pub mod format;
pub mod locales;
pub mod model;
pub mod relations;
pub mod sequence;
pub mod session;
pub mod synth;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use format::{FormatEngine, FormatSpec};
pub use locales::LocaleKey;
pub use model::{
    AdvisoryLevel, GenerateOptions, GenerationIssue, GenerationReport, NoProgress, ProgressSink,
    SizeAdvisory, size_advisory,
};
pub use relations::{RelationKind, Relationship, RelationshipEngine};
pub use sequence::{SequenceEngine, SequenceSpec};
pub use session::Session;
pub use synth::{ColumnPlan, Synthesized, synthesize, validate_value};
