// src/data.rs
//
// Typed records for CASP LGA summaries.
//
// - Metric: the score columns that follow NAME, in file order.
// - GroupId: submission group number embedded in a model name (`T1024TS427_1-D1` → 427).
// - SummaryRow / SummaryTable: one parsed summary file, rows already group-tagged.
// - CaspEdition: one benchmark round (name, data URL, ordered target list).

use std::fmt;

use crate::config::consts::SUMMARY_FILE_SUFFIX;

/// Score columns of a summary file, in their on-disk order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    N1,
    N2,
    Dist,
    N,
    Rmsd,
    GdtTs,
    LgaS3,
    LgaQ,
}

impl Metric {
    pub const COUNT: usize = 8;

    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::N1,
        Metric::N2,
        Metric::Dist,
        Metric::N,
        Metric::Rmsd,
        Metric::GdtTs,
        Metric::LgaS3,
        Metric::LgaQ,
    ];

    /// Column name as printed in the summary header.
    pub fn header(self) -> &'static str {
        match self {
            Metric::N1 => "N1",
            Metric::N2 => "N2",
            Metric::Dist => "DIST",
            Metric::N => "N",
            Metric::Rmsd => "RMSD",
            Metric::GdtTs => "GDT_TS",
            Metric::LgaS3 => "LGA_S3",
            Metric::LgaQ => "LGA_Q",
        }
    }

    /// Residue counts are integers; everything else is a float score.
    pub fn is_integer(self) -> bool {
        matches!(self, Metric::N1 | Metric::N2 | Metric::N)
    }

    pub fn from_header(h: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.header() == h)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Digits-only submission group identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(String);

impl GroupId {
    /// Accepts a bare group number such as `"427"`.
    pub fn parse(s: &str) -> Option<GroupId> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(GroupId(s!(s)))
        } else {
            None
        }
    }

    /// Digits between the first `TS` and the `_` that directly follows them.
    /// `T1024TS427_1-D1` → `427`; `T1024TS427` → None.
    pub fn from_name(name: &str) -> Option<GroupId> {
        let mut rest = name;
        while let Some(pos) = rest.find("TS") {
            let after = &rest[pos + 2..];
            let digits = after.bytes().take_while(|b| b.is_ascii_digit()).count();
            if digits > 0 && after.as_bytes().get(digits) == Some(&b'_') {
                return Some(GroupId(s!(&after[..digits])));
            }
            rest = &rest[pos + 1..];
        }
        None
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One data line of a summary file.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub n1: i32,
    pub n2: i32,
    pub dist: f32,
    pub n: i32,
    pub rmsd: f32,
    pub gdt_ts: f32,
    pub lga_s3: f32,
    pub lga_q: f32,
    pub group_id: GroupId,
}

impl SummaryRow {
    /// Uniform numeric access to any score column.
    pub fn metric(&self, m: Metric) -> f64 {
        match m {
            Metric::N1 => self.n1 as f64,
            Metric::N2 => self.n2 as f64,
            Metric::Dist => self.dist as f64,
            Metric::N => self.n as f64,
            Metric::Rmsd => self.rmsd as f64,
            Metric::GdtTs => self.gdt_ts as f64,
            Metric::LgaS3 => self.lga_s3 as f64,
            Metric::LgaQ => self.lga_q as f64,
        }
    }
}

/// Rows of one summary file, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
    /// Lines that parsed but carried no group id.
    pub dropped: usize,
}

impl SummaryTable {
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self { rows, dropped: 0 }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, SummaryRow> {
        self.rows.iter()
    }
}

impl IntoIterator for SummaryTable {
    type Item = SummaryRow;
    type IntoIter = std::vec::IntoIter<SummaryRow>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl FromIterator<SummaryRow> for SummaryTable {
    fn from_iter<I: IntoIterator<Item = SummaryRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One CASP round: where its summaries live and which targets to pull.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaspEdition {
    pub name: String,
    pub data_url: String,
    pub targets: Vec<String>,
}

impl CaspEdition {
    pub fn new(name: &str, data_url: &str, targets: Vec<String>) -> Self {
        Self { name: s!(name), data_url: s!(data_url), targets }
    }

    /// `<data_url>/<target>.SUMMARY.lga_sda.txt`
    pub fn summary_url(&self, target: &str) -> String {
        join!(self.data_url.trim_end_matches('/'), "/", target, SUMMARY_FILE_SUFFIX)
    }
}
