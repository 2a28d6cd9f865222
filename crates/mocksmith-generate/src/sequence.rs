use std::collections::HashMap;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Configuration applied when a sequence is first created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceSpec {
    pub start_value: i64,
    pub increment: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Default for SequenceSpec {
    fn default() -> Self {
        Self {
            start_value: 1,
            increment: 1,
            pattern: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct SequenceState {
    current: i64,
    increment: i64,
    pattern: Option<String>,
    prefix: String,
    suffix: String,
}

/// Named, monotonically advancing counters with optional token formatting.
///
/// Successive values for a fixed name form a strict arithmetic progression
/// until the sequence is reset; this is the guarantee auto-increment columns
/// rely on.
#[derive(Debug, Default)]
pub struct SequenceEngine {
    sequences: HashMap<String, SequenceState>,
}

impl SequenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the named sequence and returns its formatted value.
    ///
    /// The sequence is created lazily on first use; `spec` is only consulted
    /// at creation time. The stored counter is biased to `start_value -
    /// increment` so the first advance lands exactly on `start_value`.
    pub fn next_value(&mut self, name: &str, spec: Option<&SequenceSpec>) -> String {
        let state = self.sequences.entry(name.to_string()).or_insert_with(|| {
            let spec = spec.cloned().unwrap_or_default();
            SequenceState {
                current: spec.start_value - spec.increment,
                increment: spec.increment,
                pattern: spec.pattern,
                prefix: spec.prefix,
                suffix: spec.suffix,
            }
        });
        state.current += state.increment;

        match &state.pattern {
            Some(pattern) => format!(
                "{}{}{}",
                state.prefix,
                expand_tokens(pattern, state.current),
                state.suffix
            ),
            None => format!("{}{}{}", state.prefix, state.current, state.suffix),
        }
    }

    /// Current counter value without advancing; `None` for unknown names.
    pub fn current_value(&self, name: &str) -> Option<i64> {
        self.sequences.get(name).map(|state| state.current)
    }

    /// Rewinds an existing sequence so the next advance yields `start_value`.
    /// Unknown names are ignored.
    pub fn reset(&mut self, name: &str, start_value: i64) {
        if let Some(state) = self.sequences.get_mut(name) {
            state.current = start_value - state.increment;
        }
    }

    /// Discards all sequence state.
    pub fn reset_all(&mut self) {
        self.sequences.clear();
    }
}

/// Expands `{YYYY}`, `{MM}`, `{DD}` (wall clock at format time) and `{0+}`
/// (counter zero-padded to the matched width; the width is a minimum, never
/// a cap).
fn expand_tokens(pattern: &str, current: i64) -> String {
    let now = Local::now();
    let mut result = pattern.replace("{YYYY}", &format!("{:04}", now.year()));
    result = result.replace("{MM}", &format!("{:02}", now.month()));
    result = result.replace("{DD}", &format!("{:02}", now.day()));

    if let Ok(re) = regex::Regex::new(r"\{(0+)\}") {
        result = re
            .replace_all(&result, |caps: &regex::Captures<'_>| {
                let width = caps[1].len();
                format!("{current:0width$}")
            })
            .into_owned();
    }

    result
}
