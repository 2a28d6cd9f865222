use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::locales::LocaleKey;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Base seed; mixed with the table name so tables draw independent
    /// random streams.
    pub seed: u64,
    /// Locale for the localized base generators.
    pub locale: LocaleKey,
    /// Retry budget for constraint-driven regeneration of a single value.
    pub max_value_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            locale: LocaleKey::EnUs,
            max_value_attempts: 10,
        }
    }
}

/// Receives progress percentages at generation checkpoints.
///
/// This is a cooperative-yield point for host UIs repainting during large
/// runs; implementations carry no correctness weight and may do nothing.
pub trait ProgressSink {
    fn on_progress(&mut self, percent: u8);
}

/// Progress sink that discards every checkpoint.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _percent: u8) {}
}

/// Structured generation issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationIssue {
    pub level: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

/// Report for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    pub records_requested: u64,
    pub records_generated: u64,
    /// Per-column count of best-effort values that exhausted the retry
    /// budget without satisfying their constraints.
    pub constraint_misses: BTreeMap<String, u64>,
    pub fallback_count: u64,
    pub warnings_by_code: BTreeMap<String, u64>,
    pub warnings: Vec<GenerationIssue>,
    pub duration_ms: u64,
    #[serde(skip)]
    seen: BTreeSet<(String, Option<String>)>,
}

impl GenerationReport {
    pub fn new(records_requested: u64) -> Self {
        Self {
            records_requested,
            ..Self::default()
        }
    }

    /// Counts every occurrence but keeps only the first issue per
    /// (code, column) pair so large runs do not flood the report.
    pub fn record_warning(&mut self, issue: GenerationIssue) {
        *self.warnings_by_code.entry(issue.code.clone()).or_insert(0) += 1;
        if self.seen.insert((issue.code.clone(), issue.column.clone())) {
            self.warnings.push(issue);
        }
    }

    pub fn record_fallback(&mut self, code: &str, column: &str, message: String) {
        self.fallback_count += 1;
        self.record_warning(GenerationIssue {
            level: "warning".to_string(),
            code: code.to_string(),
            message,
            column: Some(column.to_string()),
        });
    }

    pub fn record_constraint_miss(&mut self, column: &str) {
        *self
            .constraint_misses
            .entry(column.to_string())
            .or_insert(0) += 1;
        self.record_warning(GenerationIssue {
            level: "warning".to_string(),
            code: "constraint_unsatisfied".to_string(),
            message: format!("best-effort value for '{column}' after exhausting retries"),
            column: Some(column.to_string()),
        });
    }
}

/// Severity of a pre-generation size advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    Warning,
    Error,
}

/// Advisory computed before generation starts. The engine surfaces it and
/// proceeds regardless; enforcing the limit is the caller's call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeAdvisory {
    pub level: AdvisoryLevel,
    pub estimated_bytes: u64,
    pub message: String,
}

/// Rough payload estimate used by the advisory thresholds.
pub const BYTES_PER_CELL: u64 = 50;

/// Estimates the dataset size and flags requests above the advisory
/// thresholds (100K records / 200MB hard advisory, large and medium
/// warnings below that).
pub fn size_advisory(num_records: u64, num_columns: usize) -> Option<SizeAdvisory> {
    let estimated_bytes = num_records
        .saturating_mul(num_columns as u64)
        .saturating_mul(BYTES_PER_CELL);
    let mb = estimated_bytes as f64 / (1024.0 * 1024.0);

    if mb > 200.0 || num_records > 100_000 {
        Some(SizeAdvisory {
            level: AdvisoryLevel::Error,
            estimated_bytes,
            message: format!(
                "dataset too large ({mb:.1}MB estimated); advisory limit is 100K records or 200MB"
            ),
        })
    } else if mb > 100.0 || num_records > 50_000 {
        Some(SizeAdvisory {
            level: AdvisoryLevel::Warning,
            estimated_bytes,
            message: format!("large dataset ({mb:.1}MB estimated); consider fewer records"),
        })
    } else if mb > 25.0 || num_records > 10_000 {
        Some(SizeAdvisory {
            level: AdvisoryLevel::Warning,
            estimated_bytes,
            message: format!("medium dataset ({mb:.1}MB estimated)"),
        })
    } else {
        None
    }
}
