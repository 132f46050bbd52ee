// src/cli.rs
use std::time::Duration;

use log::{info, warn};

use crate::config::options::{AppOptions, RunMode, ScrapeOptions, TargetSelector};
use crate::config::targets::parse_target_list;
use crate::core::net::HttpFetcher;
use crate::data::GroupId;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::scrape::{self, RunSummary};
use crate::specs::summary::ParseError;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    ListTargets(ScrapeOptions),
    Run(AppOptions),
}

/// Parse process args and run.
pub fn run() -> Result<()> {
    match parse_cli(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::ListTargets(scrape) => {
            let edition = scrape.edition();
            for t in &edition.targets {
                println!("{}", t);
            }
            Ok(())
        }
        Command::Run(opts) => {
            let fetcher = HttpFetcher::new(opts.scrape.timeout);
            let mut progress = LogProgress::default();
            let summary = scrape::run(&opts, &fetcher, Some(&mut progress))?;
            report(&summary);
            Ok(())
        }
    }
}

fn report(summary: &RunSummary) {
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    if !summary.skipped.is_empty() {
        warn!(
            "{} of {} targets skipped (unparseable summaries):",
            summary.skipped.len(),
            summary.targets_fetched
        );
        for (target, reason) in &summary.skipped {
            warn!("  {target}: {reason}");
        }
    }
    info!(
        "Done: {} rows in {} files from {} targets",
        summary.rows_written,
        summary.files_written.len(),
        summary.targets_fetched
    );
}

pub fn parse_cli<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut mode: Option<RunMode> = None;
    let mut list_targets = false;
    let mut scrape = ScrapeOptions::default();
    let mut out: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--groups" => set_mode(&mut mode, RunMode::AllGroups)?,
            "--winner" => {
                let v = value(&mut args, "--winner")?;
                let id = GroupId::parse(&v)
                    .ok_or_else(|| usage(format!("Group id must be digits: {}", v)))?;
                set_mode(&mut mode, RunMode::Winner(id))?;}
            "--targets" => {
                let v = value(&mut args, "--targets")?;
                let list = parse_target_list(&v);
                if list.is_empty() { return Err(usage("Empty target list")); }
                scrape.targets = TargetSelector::Names(list);}
            "--data-url" => scrape.data_url = value(&mut args, "--data-url")?,
            "--casp" => scrape.edition = value(&mut args, "--casp")?,
            "-o" | "--out" => out = Some(value(&mut args, "--out")?),
            "--timeout" => {
                let v = value(&mut args, "--timeout")?;
                let secs: u64 = v.parse().map_err(|_| usage(format!("Invalid timeout: {}", v)))?;
                if secs == 0 { return Err(usage("Timeout must be at least 1 second")); }
                scrape.timeout = Some(Duration::from_secs(secs));}
            "--list-targets" => list_targets = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(format!("Unknown arg: {}", a))),
        }
    }

    if list_targets {
        return Ok(Command::ListTargets(scrape));
    }
    let mode = mode.ok_or_else(|| usage("Specify --groups or --winner <group id>"))?;

    let mut opts = AppOptions::new(mode);
    opts.scrape = scrape;
    if let Some(o) = out {
        opts.export.set_out_dir(&o);
    }
    Ok(Command::Run(opts))
}

fn set_mode(slot: &mut Option<RunMode>, mode: RunMode) -> Result<()> {
    if slot.replace(mode).is_some() {
        return Err(usage("Choose one of --groups / --winner"));
    }
    Ok(())
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| usage(format!("Missing value for {}", flag)))
}

fn usage(msg: impl Into<String>) -> Error {
    Error::Usage(msg.into())
}

/* ---------------- Progress sink ---------------- */

/// Reports per-target progress through the logger.
#[derive(Default)]
struct LogProgress {
    total: usize,
    seen: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.seen = 0;
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, target: &str, rows: usize) {
        self.seen += 1;
        info!("[{}/{}] {target}: {rows} rows", self.seen, self.total);
    }

    fn item_skipped(&mut self, target: &str, _reason: &ParseError) {
        self.seen += 1;
        info!("[{}/{}] {target}: skipped", self.seen, self.total);
    }

    fn finish(&mut self) {
        info!("Processed {}/{} targets", self.seen, self.total);
    }
}
