// tests/common/mod.rs
//
// Shared fixtures: summary text builder, canned fetcher, temp dirs.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use casp_extract::core::net::{Fetch, FetchError};

pub const HEADER: &str =
    "NAME                               N1    N2   DIST     N    RMSD   GDT_TS   LGA_S3   LGA_Q";

/// One summary line; `name` is written verbatim (add the suffix yourself).
pub fn line(name: &str, rmsd: &str, gdt_ts: &str) -> String {
    format!("{name:<33}  408   408    5.0   369  {rmsd:>6}  {gdt_ts:>7}   80.000   0.357")
}

/// Header plus one line per `(name, rmsd, gdt_ts)`, with trailing blank line.
pub fn summary(rows: &[(&str, &str, &str)]) -> String {
    let mut s = String::from(HEADER);
    s.push('\n');
    for (name, rmsd, gdt) in rows {
        s.push_str(&line(name, rmsd, gdt));
        s.push('\n');
    }
    s.push('\n');
    s
}

/// Serves canned bodies keyed by URL suffix (target name) and records every request.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, Result<String, u16>>,
    pub requested: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn page(mut self, target: &str, body: String) -> Self {
        self.pages.insert(target.to_string(), Ok(body));
        self
    }

    pub fn failing(mut self, target: &str, code: u16) -> Self {
        self.pages.insert(target.to_string(), Err(code));
        self
    }

    pub fn requested_targets(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = url
            .rsplit('/')
            .next()
            .and_then(|f| f.strip_suffix(".SUMMARY.lga_sda.txt"))
            .unwrap_or(url)
            .to_string();
        self.requested.borrow_mut().push(target.clone());
        match self.pages.get(&target) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(code)) => Err(FetchError::Status { url: url.to_string(), code: *code }),
            None => Err(FetchError::Transport {
                url: url.to_string(),
                reason: "no such host".to_string(),
            }),
        }
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("casp_extract_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
