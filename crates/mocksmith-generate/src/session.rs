use std::collections::HashMap;

use crate::format::FormatEngine;
use crate::relations::RelationshipEngine;
use crate::sequence::{SequenceEngine, SequenceSpec};

/// Caller-owned bundle of the stateful advanced-generation engines.
///
/// Each independent generation session owns its own `Session`; there is no
/// process-wide state, so isolation between datasets is structural rather
/// than a calling convention. Reuse one session across passes when a child
/// table must resolve foreign keys against a previously generated parent.
#[derive(Debug, Default)]
pub struct Session {
    pub sequences: SequenceEngine,
    pub formats: FormatEngine,
    pub relations: RelationshipEngine,
    sequence_specs: HashMap<String, SequenceSpec>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the spec used when the named column's sequence is first
    /// created; columns without a spec get the defaults (start 1, step 1).
    pub fn set_sequence_spec(&mut self, column: impl Into<String>, spec: SequenceSpec) {
        self.sequence_specs.insert(column.into(), spec);
    }

    pub(crate) fn next_sequence_value(&mut self, column: &str) -> String {
        let spec = self.sequence_specs.get(column).cloned();
        self.sequences.next_value(column, spec.as_ref())
    }

    /// Rewinds all sequences and clears parent pools before a new dataset is
    /// produced. Registered formats, relationships and sequence specs
    /// survive, matching what independent export runs expect to share.
    pub fn reset_run(&mut self) {
        self.sequences.reset_all();
        self.relations.clear_parent_rows();
    }
}
