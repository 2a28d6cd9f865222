use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use mocksmith_core::{Record, TableSchema, validate_schema};

use crate::errors::GenerationError;
use crate::model::{AdvisoryLevel, GenerateOptions, GenerationReport, ProgressSink, size_advisory};
use crate::session::Session;
use crate::synth::{ColumnPlan, synthesize};

/// Number of progress checkpoints reported across a run.
const PROGRESS_CHECKPOINTS: u64 = 20;

/// Outcome of a generation run.
#[derive(Debug)]
pub struct GenerationResult {
    pub records: Vec<Record>,
    pub report: GenerationReport,
}

/// Deterministic record generator.
///
/// Two engines with the same options produce identical datasets for the same
/// schema; distinct tables draw from independent streams because the base
/// seed is mixed with the table name.
#[derive(Debug, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generates records for a single table against a fresh [`Session`].
    ///
    /// Sequences start from their configured start value and no parent pools
    /// exist, so the output depends on nothing but the schema and options.
    pub fn run(
        &self,
        schema: &TableSchema,
        num_records: u64,
        progress: &mut dyn ProgressSink,
    ) -> Result<GenerationResult, GenerationError> {
        let mut session = Session::new();
        self.run_with(schema, num_records, &mut session, progress)
    }

    /// Generates records against a caller-owned session.
    ///
    /// The session is not reset, so multi-table datasets work by running the
    /// parent table first and the child second with the same session; each
    /// pass stores its rows as the parent pool for its table name.
    pub fn run_with(
        &self,
        schema: &TableSchema,
        num_records: u64,
        session: &mut Session,
        progress: &mut dyn ProgressSink,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();

        validate_schema(schema)?;
        let plans = schema
            .columns
            .iter()
            .map(ColumnPlan::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = GenerationReport::new(num_records);

        if let Some(advisory) = size_advisory(num_records, schema.columns.len()) {
            match advisory.level {
                AdvisoryLevel::Error => warn!(
                    table = %schema.name,
                    estimated_bytes = advisory.estimated_bytes,
                    "size advisory exceeded; generating anyway"
                ),
                AdvisoryLevel::Warning => debug!(
                    table = %schema.name,
                    estimated_bytes = advisory.estimated_bytes,
                    "large generation request"
                ),
            }
            report.record_warning(crate::model::GenerationIssue {
                level: "warning".to_string(),
                code: "size_advisory".to_string(),
                message: advisory.message,
                column: None,
            });
        }

        let table_seed = hash_seed(self.options.seed, &schema.name);
        let mut rng = ChaCha8Rng::seed_from_u64(table_seed);

        info!(
            table = %schema.name,
            records = num_records,
            columns = schema.columns.len(),
            seed = self.options.seed,
            locale = %self.options.locale,
            "generation started"
        );

        let interval = num_records.div_ceil(PROGRESS_CHECKPOINTS).max(1);
        let mut records = Vec::with_capacity(num_records as usize);

        for index in 0..num_records {
            let mut record = Record::with_capacity(plans.len());
            for plan in &plans {
                let synthesized = synthesize(
                    plan,
                    session,
                    self.options.locale,
                    &mut rng,
                    self.options.max_value_attempts,
                    &mut report,
                );
                record.push(plan.name.clone(), synthesized.value);
            }
            records.push(record);
            report.records_generated += 1;

            let completed = index + 1;
            if completed % interval == 0 || completed == num_records {
                let percent = ((completed as f64 / num_records as f64) * 100.0).round() as u8;
                progress.on_progress(percent);
            }
        }

        session.relations.store_parent_rows(&schema.name, &records);

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            table = %schema.name,
            records_generated = report.records_generated,
            fallbacks = report.fallback_count,
            warnings = report.warnings.len(),
            duration_ms = report.duration_ms,
            "generation completed"
        );
        for issue in &report.warnings {
            warn!(
                table = %schema.name,
                code = %issue.code,
                column = issue.column.as_deref().unwrap_or("-"),
                "{}",
                issue.message
            );
        }

        Ok(GenerationResult { records, report })
    }
}

/// FNV-1a style mix of the base seed and table name.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
