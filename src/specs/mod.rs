// src/specs/mod.rs
//! # Parsing "specs" module
//!
//! Format-specific readers for the files published by the prediction center.
//! Each spec owns exactly one file format and encodes *where the data lives* and
//! *what counts as malformed*.
//!
//! ## What lives here
//! - **Pure text parsing** of downloaded content into typed `data` records.
//! - **Column rules** (names, types, separators) and name clean-up.
//! - A **tagged outcome** so callers can tell "malformed" from "nothing usable".
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and run control (`scrape`).
//! - **Grouping/filtering** (`groups`) and **CSV output** (`file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::run → core::net::Fetch::fetch → specs::summary::parse
//!                   ↘ groups (aggregate / winner) → file::write_*
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against inline fixtures.
pub mod summary;
