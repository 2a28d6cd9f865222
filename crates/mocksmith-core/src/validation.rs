use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::TableSchema;

/// Validate internal consistency of a table schema.
///
/// This checks:
/// - non-empty table and column names, duplicate column names
/// - coherent constraint bounds (`min <= max`, `min_length <= max_length`)
/// - `pattern` constraints compile as regular expressions
///
/// Pattern compile-checking here is the precondition that lets the
/// generation engine treat a malformed pattern as a caller error instead of
/// failing mid-dataset.
pub fn validate_schema(schema: &TableSchema) -> Result<()> {
    if schema.name.trim().is_empty() {
        return Err(Error::InvalidSchema("table name must not be empty".into()));
    }
    if schema.columns.is_empty() {
        return Err(Error::InvalidSchema(format!(
            "table '{}' has no columns",
            schema.name
        )));
    }

    let mut seen = BTreeSet::new();
    for column in &schema.columns {
        if column.name.trim().is_empty() {
            return Err(Error::InvalidSchema(format!(
                "table '{}' has a column with an empty name",
                schema.name
            )));
        }
        if !seen.insert(column.name.clone()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate column name: {}.{}",
                schema.name, column.name
            )));
        }

        let Some(constraints) = &column.constraints else {
            continue;
        };

        if let (Some(min), Some(max)) = (constraints.min, constraints.max)
            && min > max
        {
            return Err(Error::InvalidSchema(format!(
                "column '{}.{}': min {} exceeds max {}",
                schema.name, column.name, min, max
            )));
        }

        if let (Some(min_length), Some(max_length)) =
            (constraints.min_length, constraints.max_length)
            && min_length > max_length
        {
            return Err(Error::InvalidSchema(format!(
                "column '{}.{}': min_length {} exceeds max_length {}",
                schema.name, column.name, min_length, max_length
            )));
        }

        if let Some(pattern) = &constraints.pattern
            && let Err(err) = regex::Regex::new(pattern)
        {
            return Err(Error::InvalidSchema(format!(
                "column '{}.{}': invalid pattern: {}",
                schema.name, column.name, err
            )));
        }
    }

    Ok(())
}
