use std::collections::HashMap;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &str = "0123456789";

/// A registered custom format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatSpec {
    pub pattern: String,
    #[serde(default)]
    pub description: String,
}

/// Registry of named token patterns expanded into random strings.
///
/// Expansion is single-pass and independent per call; a format is explicitly
/// not a sequence and two calls are expected to differ.
#[derive(Debug, Default)]
pub struct FormatEngine {
    formats: HashMap<String, FormatSpec>,
}

impl FormatEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.formats.insert(
            name.into(),
            FormatSpec {
                pattern: pattern.into(),
                description: description.into(),
            },
        );
    }

    /// Expands the named format. Unregistered names are an error; callers
    /// that want a best-effort value substitute their own fallback.
    pub fn generate(&self, name: &str, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        let spec = self
            .formats
            .get(name)
            .ok_or_else(|| GenerationError::FormatNotFound(name.to_string()))?;
        Ok(expand_pattern(&spec.pattern, rng))
    }

    pub fn formats(&self) -> impl Iterator<Item = (&str, &FormatSpec)> {
        self.formats
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.formats.remove(name).is_some()
    }
}

/// `#` draws a digit, `@` a letter (52 symbols), `*` an alphanumeric
/// character (62 symbols); every other character is copied verbatim.
fn expand_pattern(pattern: &str, rng: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        match ch {
            '#' => out.push(pick_char(DIGITS, rng)),
            '@' => out.push(pick_char(LETTERS, rng)),
            '*' => out.push(pick_char(ALPHANUMERIC, rng)),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn random_alphanumeric(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len).map(|_| pick_char(ALPHANUMERIC, rng)).collect()
}

fn pick_char(charset: &str, rng: &mut dyn RngCore) -> char {
    let bytes = charset.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}
