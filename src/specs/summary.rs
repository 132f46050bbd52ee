// src/specs/summary.rs
//! Parsing *spec* for LGA summary files (`<target>.SUMMARY.lga_sda.txt`).
//!
//! Layout of the file:
//! - First non-blank line is the header: `NAME N1 N2 DIST N RMSD GDT_TS LGA_S3 LGA_Q`.
//! - Every following non-blank line is one model.
//! - Columns are separated by **two or more** whitespace characters.
//!
//! Rules:
//! - Header names must match exactly; columns are located by name.
//! - `N1`, `N2`, `N` are `i32`; the rest of the metrics are `f32`.
//!   One bad value anywhere fails the **whole file**.
//! - `NAME` loses a trailing `:SUMMARY(GDT).lga`.
//! - Rows whose name has no `TS<digits>_` group id are dropped (and counted), not fatal.
//!
//! No networking here; `scrape` fetches and decides what a failure means for the run.

use thiserror::Error;

use crate::config::consts::NAME_COLUMN;
use crate::core::sanitize::{split_columns, strip_name_suffix};
use crate::data::{GroupId, Metric, SummaryRow, SummaryTable};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("no header line")]
    Empty,
    #[error("bad header: {0}")]
    Header(String),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount { line: usize, expected: usize, found: usize },
    #[error("line {line}: {column} value '{value}' is not a valid {kind}")]
    Value { line: usize, column: &'static str, value: String, kind: &'static str },
}

/// Result of parsing one file.
/// Keeps "file was malformed" apart from "file had no usable rows".
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    Parsed(SummaryTable),
    Failed(ParseError),
}

impl SummaryOutcome {
    /// Empty table on failure.
    pub fn into_table(self) -> SummaryTable {
        match self {
            SummaryOutcome::Parsed(t) => t,
            SummaryOutcome::Failed(_) => SummaryTable::empty(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SummaryOutcome::Failed(_))
    }
}

impl From<Result<SummaryTable, ParseError>> for SummaryOutcome {
    fn from(r: Result<SummaryTable, ParseError>) -> Self {
        match r {
            Ok(t) => SummaryOutcome::Parsed(t),
            Err(e) => SummaryOutcome::Failed(e),
        }
    }
}

/// Header row every summary must carry.
pub fn expected_header() -> Vec<String> {
    cols![NAME_COLUMN, "N1", "N2", "DIST", "N", "RMSD", "GDT_TS", "LGA_S3", "LGA_Q"]
}

/// Never fails the caller.
pub fn parse(content: &str) -> SummaryOutcome {
    try_parse(content).into()
}

pub fn try_parse(content: &str) -> Result<SummaryTable, ParseError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(ParseError::Empty)?;
    let layout = Layout::from_header(&split_columns(header_line))?;

    let mut table = SummaryTable::empty();
    for (line_no, line) in lines {
        let fields = split_columns(line);
        if fields.len() != layout.width {
            return Err(ParseError::FieldCount {
                line: line_no,
                expected: layout.width,
                found: fields.len(),
            });
        }
        match layout.read_row(line_no, &fields)? {
            Some(row) => table.rows.push(row),
            None => table.dropped += 1,
        }
    }
    Ok(table)
}

/* ---------------- helpers ---------------- */

/// Field positions resolved from the header.
struct Layout {
    name: usize,
    metrics: [usize; Metric::COUNT],
    width: usize,
}

impl Layout {
    fn from_header(fields: &[&str]) -> Result<Layout, ParseError> {
        let mut name: Option<usize> = None;
        let mut metrics: [Option<usize>; Metric::COUNT] = [None; Metric::COUNT];

        for (ix, &h) in fields.iter().enumerate() {
            let slot = if h == NAME_COLUMN {
                &mut name
            } else if let Some(m) = Metric::from_header(h) {
                &mut metrics[m as usize]
            } else {
                return Err(ParseError::Header(format!("unknown column '{h}'")));
            };
            if slot.replace(ix).is_some() {
                return Err(ParseError::Header(format!("duplicate column '{h}'")));
            }
        }

        let name = name.ok_or_else(|| ParseError::Header(format!("missing column '{NAME_COLUMN}'")))?;
        let mut resolved = [0usize; Metric::COUNT];
        for m in Metric::ALL {
            resolved[m as usize] = metrics[m as usize]
                .ok_or_else(|| ParseError::Header(format!("missing column '{m}'")))?;
        }

        Ok(Layout { name, metrics: resolved, width: fields.len() })
    }

    fn field<'a>(&self, fields: &[&'a str], m: Metric) -> &'a str {
        fields[self.metrics[m as usize]]
    }

    fn int(&self, line: usize, fields: &[&str], m: Metric) -> Result<i32, ParseError> {
        let raw = self.field(fields, m);
        raw.parse::<i32>().map_err(|_| ParseError::Value {
            line,
            column: m.header(),
            value: s!(raw),
            kind: "int32",
        })
    }

    fn float(&self, line: usize, fields: &[&str], m: Metric) -> Result<f32, ParseError> {
        let raw = self.field(fields, m);
        raw.parse::<f32>().map_err(|_| ParseError::Value {
            line,
            column: m.header(),
            value: s!(raw),
            kind: "float32",
        })
    }

    /// Typed row, or None when the name carries no group id.
    /// Values are checked before the group id so a bad value is never masked by a drop.
    fn read_row(&self, line: usize, fields: &[&str]) -> Result<Option<SummaryRow>, ParseError> {
        let n1 = self.int(line, fields, Metric::N1)?;
        let n2 = self.int(line, fields, Metric::N2)?;
        let dist = self.float(line, fields, Metric::Dist)?;
        let n = self.int(line, fields, Metric::N)?;
        let rmsd = self.float(line, fields, Metric::Rmsd)?;
        let gdt_ts = self.float(line, fields, Metric::GdtTs)?;
        let lga_s3 = self.float(line, fields, Metric::LgaS3)?;
        let lga_q = self.float(line, fields, Metric::LgaQ)?;

        let name = strip_name_suffix(fields[self.name]);
        let Some(group_id) = GroupId::from_name(name) else {
            return Ok(None);
        };

        Ok(Some(SummaryRow {
            name: s!(name),
            n1,
            n2,
            dist,
            n,
            rmsd,
            gdt_ts,
            lga_s3,
            lga_q,
            group_id,
        }))
    }
}
