// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use super::targets::default_targets;
use crate::data::{CaspEdition, GroupId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub mode: RunMode,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults for everything except the mode, which is always chosen explicitly.
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            scrape: ScrapeOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// One `NAME,GDT_TS` file per group found in any summary.
    AllGroups,
    /// One `NAME,GDT_TS,RMSD` file holding a single group's model rows.
    Winner(GroupId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetSelector {
    All,
    Names(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub edition: String,
    pub data_url: String,
    pub targets: TargetSelector,
    /// Global per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            edition: s!(DEFAULT_EDITION),
            data_url: s!(DEFAULT_DATA_URL),
            targets: TargetSelector::All,
            timeout: None,
        }
    }
}

impl ScrapeOptions {
    fn resolve_targets(&self) -> Vec<String> {
        match &self.targets {
            TargetSelector::All => default_targets(),
            TargetSelector::Names(v) => v.clone(),
        }
    }

    pub fn edition(&self) -> CaspEdition {
        CaspEdition::new(&self.edition, &self.data_url, self.resolve_targets())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Accepts either separator style; an empty string falls back to the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::file::normalize_separators(s))
        };
    }

    /// Directory that receives the per-group files of all-groups mode.
    pub fn group_results_dir(&self) -> PathBuf {
        self.out_dir.join(GROUP_RESULTS_SUBDIR)
    }

    /// `<out>/group_results/group_<id>_results.csv`
    pub fn group_file_path(&self, id: &GroupId) -> PathBuf {
        self.group_results_dir().join(results_file_name(id))
    }

    /// `<out>/group_<id>_results.csv`
    pub fn winner_file_path(&self, id: &GroupId) -> PathBuf {
        self.out_dir.join(results_file_name(id))
    }
}

pub fn results_file_name(id: &GroupId) -> String {
    join!(RESULTS_FILE_PREFIX, id.as_str(), RESULTS_FILE_SUFFIX)
}
