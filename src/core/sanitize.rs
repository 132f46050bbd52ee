// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::NAME_SUFFIX;

/// Column separator of LGA summaries: two or more whitespace characters.
/// Single spaces stay inside a field.
static COLUMN_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("column separator pattern"));

/// Split one summary line into fields. Leading/trailing whitespace is ignored.
pub fn split_columns(line: &str) -> Vec<&str> {
    let t = line.trim();
    if t.is_empty() { return Vec::new(); }
    COLUMN_SEP.split(t).collect()
}

/// Remove one trailing `:SUMMARY(GDT).lga`, if present.
pub fn strip_name_suffix(name: &str) -> &str {
    name.strip_suffix(NAME_SUFFIX).unwrap_or(name)
}
