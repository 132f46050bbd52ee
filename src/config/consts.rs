// src/config/consts.rs

// Net config
pub const DEFAULT_EDITION: &str = "CASP14";
pub const DEFAULT_DATA_URL: &str = "https://predictioncenter.org/download_area/CASP14/results/sda";
pub const SUMMARY_FILE_SUFFIX: &str = ".SUMMARY.lga_sda.txt";
pub const USER_AGENT: &str = concat!("casp_extract/", env!("CARGO_PKG_VERSION"));

// Parse
pub const NAME_SUFFIX: &str = ":SUMMARY(GDT).lga";
pub const NAME_COLUMN: &str = "NAME";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const GROUP_RESULTS_SUBDIR: &str = "group_results";
pub const RESULTS_FILE_PREFIX: &str = "group_";
pub const RESULTS_FILE_SUFFIX: &str = "_results.csv";
