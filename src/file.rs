// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::Serialize;

use crate::config::options::ExportOptions;
use crate::data::{GroupId, SummaryRow};
use crate::error::{Error, Result};
use crate::groups::GroupedResults;

/// All-groups projection: `NAME,GDT_TS`.
#[derive(Debug, Serialize)]
pub struct GroupRecord<'a> {
    #[serde(rename = "NAME")]
    pub name: &'a str,
    #[serde(rename = "GDT_TS")]
    pub gdt_ts: f32,
}

impl<'a> From<&'a SummaryRow> for GroupRecord<'a> {
    fn from(r: &'a SummaryRow) -> Self {
        Self { name: &r.name, gdt_ts: r.gdt_ts }
    }
}

/// Winner projection: `NAME,GDT_TS,RMSD`.
#[derive(Debug, Serialize)]
pub struct WinnerRecord<'a> {
    #[serde(rename = "NAME")]
    pub name: &'a str,
    #[serde(rename = "GDT_TS")]
    pub gdt_ts: f32,
    #[serde(rename = "RMSD")]
    pub rmsd: f32,
}

impl<'a> From<&'a SummaryRow> for WinnerRecord<'a> {
    fn from(r: &'a SummaryRow) -> Self {
        Self { name: &r.name, gdt_ts: r.gdt_ts, rmsd: r.rmsd }
    }
}

/// One `group_results/group_<id>_results.csv` per populated group.
/// Returns the paths written, in group order.
pub fn write_group_results(export: &ExportOptions, grouped: &GroupedResults) -> Result<Vec<PathBuf>> {
    if grouped.is_empty() {
        return Ok(Vec::new());
    }
    ensure_directory(&export.group_results_dir())?;

    let mut written = Vec::with_capacity(grouped.len());
    for (id, rows) in grouped.iter() {
        let path = export.group_file_path(id);
        let n = write_records(&path, rows.iter().map(|r| GroupRecord::from(*r)))?;
        info!("Saved {n} rows for group {id} -> {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// The combined winner file. Nothing is written when `rows` is empty.
pub fn write_winner_results(
    export: &ExportOptions,
    id: &GroupId,
    rows: &[SummaryRow],
) -> Result<Option<PathBuf>> {
    if rows.is_empty() {
        return Ok(None);
    }
    let path = export.winner_file_path(id);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let n = write_records(&path, rows.iter().map(WinnerRecord::from))?;
    info!("Saved results with {n} entries -> {}", path.display());
    Ok(Some(path))
}

/// Create/truncate `path` and serialize `records` with a header row.
/// Returns the number of records written.
pub fn write_records<T, I>(path: &Path, records: I) -> Result<usize>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let csv_err = |source: csv::Error| Error::Csv { path: path.to_path_buf(), source };

    let mut w = csv::Writer::from_path(path).map_err(csv_err)?;
    let mut n = 0usize;
    for rec in records {
        w.serialize(rec).map_err(csv_err)?;
        n += 1;
    }
    w.flush()?;
    Ok(n)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_normalized() {
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(normalize_separators("a/b\\c"), format!("a{sep}b{sep}c"));
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let mut p = std::env::temp_dir();
        p.push("casp_extract_not_a_dir.txt");
        fs::write(&p, "x").unwrap();
        assert!(matches!(ensure_directory(&p), Err(Error::NotADirectory(_))));
        let _ = fs::remove_file(&p);
    }
}
