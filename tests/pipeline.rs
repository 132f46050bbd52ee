// tests/pipeline.rs
//
// Whole runs against a canned fetcher: ordering, skip reporting, fail-fast.
//
mod common;

use std::fs;

use casp_extract::config::options::{AppOptions, RunMode, TargetSelector};
use casp_extract::core::net::FetchError;
use casp_extract::data::GroupId;
use casp_extract::progress::{NullProgress, Progress};
use casp_extract::scrape;
use casp_extract::specs::summary::ParseError;
use casp_extract::Error;
use common::{summary, tmp_dir, StubFetcher};

const TARGETS: [&str; 5] = ["T1", "T2", "T3", "T4", "T5"];

fn opts(mode: RunMode, name: &str) -> AppOptions {
    let mut o = AppOptions::new(mode);
    o.scrape.data_url = "https://example.invalid/sda/".to_string();
    o.scrape.targets = TargetSelector::Names(TARGETS.iter().map(|t| t.to_string()).collect());
    o.export.set_out_dir(tmp_dir(name).to_str().unwrap());
    o
}

fn page(target: &str, groups: &[(&str, &str)]) -> String {
    let names: Vec<String> = groups
        .iter()
        .map(|(g, model)| format!("{target}TS{g}_{model}-D1:SUMMARY(GDT).lga"))
        .collect();
    let rows: Vec<(&str, &str, &str)> = names.iter().map(|n| (n.as_str(), "2.00", "55.5")).collect();
    summary(&rows)
}

fn full_stub() -> StubFetcher {
    TARGETS.iter().fold(StubFetcher::default(), |f, t| {
        f.page(t, page(t, &[("427", "1"), ("009", "1")]))
    })
}

#[derive(Default)]
struct Recorder {
    begun: usize,
    done: Vec<(String, usize)>,
    skipped: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.begun = total; }
    fn item_done(&mut self, target: &str, rows: usize) { self.done.push((target.into(), rows)); }
    fn item_skipped(&mut self, target: &str, _r: &ParseError) { self.skipped.push(target.into()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn all_groups_run_writes_one_file_per_group() {
    let o = opts(RunMode::AllGroups, "pipe_groups");
    let fetcher = full_stub();
    let mut rec = Recorder::default();

    let summary = scrape::run(&o, &fetcher, Some(&mut rec)).unwrap();

    assert_eq!(fetcher.requested_targets(), TARGETS.to_vec());
    assert_eq!(summary.targets_fetched, 5);
    assert_eq!(summary.files_written.len(), 2);
    assert_eq!(summary.rows_written, 10);
    assert!(summary.skipped.is_empty());
    assert_eq!(rec.begun, 5);
    assert_eq!(rec.done.len(), 5);
    assert!(rec.finished);

    let g427 = fs::read_to_string(o.export.group_file_path(&GroupId::parse("427").unwrap())).unwrap();
    let names: Vec<&str> = g427.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(names, vec!["T1TS427_1-D1", "T2TS427_1-D1", "T3TS427_1-D1", "T4TS427_1-D1", "T5TS427_1-D1"]);
}

#[test]
fn unparseable_target_is_skipped_and_reported() {
    let o = opts(RunMode::Winner(GroupId::parse("427").unwrap()), "pipe_skip");
    let fetcher = full_stub().page("T2", "<html>maintenance</html>".to_string());
    let mut rec = Recorder::default();

    let summary = scrape::run(&o, &fetcher, Some(&mut rec)).unwrap();

    assert_eq!(summary.targets_fetched, 5);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].0, "T2");
    assert!(matches!(summary.skipped[0].1, ParseError::Header(_)));
    assert_eq!(rec.skipped, vec!["T2".to_string()]);
    assert_eq!(summary.rows_written, 4);

    let s = fs::read_to_string(&summary.files_written[0]).unwrap();
    assert!(s.starts_with("NAME,GDT_TS,RMSD\n"));
    assert!(!s.contains("T2TS427"));
    assert!(!s.contains("TS009"));
}

#[test]
fn fetch_failure_on_third_target_halts_without_output() {
    let o = opts(RunMode::AllGroups, "pipe_failfast");
    let fetcher = full_stub().failing("T3", 404);

    let err = scrape::run(&o, &fetcher, Some(&mut NullProgress)).unwrap_err();

    match err {
        Error::Fetch { target, source: FetchError::Status { code, url } } => {
            assert_eq!(target, "T3");
            assert_eq!(code, 404);
            assert_eq!(url, "https://example.invalid/sda/T3.SUMMARY.lga_sda.txt");
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
    assert_eq!(fetcher.requested_targets(), vec!["T1", "T2", "T3"]);
    assert!(!o.export.group_results_dir().exists());
}

#[test]
fn winner_fetch_failure_writes_no_file() {
    let id = GroupId::parse("427").unwrap();
    let o = opts(RunMode::Winner(id.clone()), "pipe_failfast_winner");
    let fetcher = full_stub().failing("T5", 500);

    assert!(scrape::run(&o, &fetcher, None).is_err());
    assert!(!o.export.winner_file_path(&id).exists());
}

#[test]
fn winner_without_matches_succeeds_with_no_files() {
    let o = opts(RunMode::Winner(GroupId::parse("1").unwrap()), "pipe_nomatch");
    let fetcher = full_stub();

    let summary = scrape::run(&o, &fetcher, None).unwrap();
    assert!(summary.files_written.is_empty());
    assert_eq!(summary.rows_written, 0);
    assert_eq!(summary.targets_fetched, 5);
}
