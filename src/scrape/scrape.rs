// src/scrape/scrape.rs
use std::path::PathBuf;

use log::{info, warn};

use crate::{
    config::options::{AppOptions, RunMode},
    core::net::Fetch,
    data::{CaspEdition, SummaryRow, SummaryTable},
    error::{Error, Result},
    file,
    groups::{GroupedResults, WinnerFilter},
    progress::Progress,
    specs::summary::{self, ParseError, SummaryOutcome},
};

/// What a full pass over the targets produced, before anything is written.
#[derive(Debug, Default)]
pub struct Collected {
    pub targets_fetched: usize,
    /// Targets whose summary was fetched but could not be parsed.
    pub skipped: Vec<(String, ParseError)>,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub rows_written: usize,
    pub targets_fetched: usize,
    pub skipped: Vec<(String, ParseError)>,
}

/// Fetch and parse every target in order, handing each table to `sink`.
///
/// The first fetch error aborts the pass; targets after it are never requested.
/// A parse failure only skips that target.
pub fn collect<F>(
    edition: &CaspEdition,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
    mut sink: F,
) -> Result<Collected>
where
    F: FnMut(&str, SummaryTable),
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(edition.targets.len());
        p.log(&format!("Fetching {} summaries for {}", edition.targets.len(), edition.name));
    }

    let mut out = Collected::default();
    let result = fetch_each(edition, fetcher, &mut progress, &mut out, &mut sink);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result.map(|()| out)
}

fn fetch_each<F>(
    edition: &CaspEdition,
    fetcher: &dyn Fetch,
    progress: &mut Option<&mut dyn Progress>,
    out: &mut Collected,
    sink: &mut F,
) -> Result<()>
where
    F: FnMut(&str, SummaryTable),
{
    for target in &edition.targets {
        let url = edition.summary_url(target);
        let body = fetcher
            .fetch(&url)
            .map_err(|source| Error::Fetch { target: target.clone(), source })?;
        out.targets_fetched += 1;

        match summary::parse(&body) {
            SummaryOutcome::Parsed(table) => {
                if table.dropped > 0 {
                    info!("{target}: dropped {} rows without a group id", table.dropped);
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(target, table.len());
                }
                sink(target, table);
            }
            SummaryOutcome::Failed(reason) => {
                warn!("{target}: parsing error, target skipped: {reason}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(target, &reason);
                }
                out.skipped.push((target.clone(), reason));
            }
        }
    }
    Ok(())
}

/// Top-level runner: dispatch on mode, collect everything, then write.
/// Nothing touches the output directory unless every target was fetched.
pub fn run(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let edition = opts.scrape.edition();
    info!("{}: {} targets from {}", edition.name, edition.targets.len(), edition.data_url);

    match &opts.mode {
        RunMode::AllGroups => run_all_groups(opts, &edition, fetcher, progress),
        RunMode::Winner(id) => run_winner(opts, &edition, WinnerFilter::new(id.clone()), fetcher, progress),
    }
}

/* ---------------- All groups ---------------- */

fn run_all_groups(
    opts: &AppOptions,
    edition: &CaspEdition,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut grouped = GroupedResults::new();
    let collected = collect(edition, fetcher, progress, |_, table| grouped.absorb(table))?;

    let files_written = file::write_group_results(&opts.export, &grouped)?;
    info!("Wrote {} group files", files_written.len());

    Ok(RunSummary {
        files_written,
        rows_written: grouped.total_rows(),
        targets_fetched: collected.targets_fetched,
        skipped: collected.skipped,
    })
}

/* ---------------- Winner ---------------- */

fn run_winner(
    opts: &AppOptions,
    edition: &CaspEdition,
    filter: WinnerFilter,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut winners: Vec<SummaryRow> = Vec::new();
    let collected = collect(edition, fetcher, progress, |_, table| {
        winners.extend(filter.apply(&table));
    })?;

    let id = filter.group_id();
    let files_written = match file::write_winner_results(&opts.export, id, &winners)? {
        Some(path) => vec![path],
        None => {
            info!("No matching entries found for group {id}");
            Vec::new()
        }
    };

    Ok(RunSummary {
        files_written,
        rows_written: winners.len(),
        targets_fetched: collected.targets_fetched,
        skipped: collected.skipped,
    })
}
