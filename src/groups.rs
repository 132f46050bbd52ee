// src/groups.rs
//
// Group-level views over parsed summaries.
//
// - GroupedResults: every row bucketed by group id, one fragment per source table.
// - WinnerFilter: one group's per-model rows (`TS<id>_<model>-D<domain>`), across targets.

use std::collections::BTreeMap;

use log::debug;
use regex::Regex;

use crate::data::{GroupId, SummaryRow, SummaryTable};

/// Rows per group, kept as fragments in target order.
#[derive(Clone, Debug, Default)]
pub struct GroupedResults {
    groups: BTreeMap<GroupId, Vec<Vec<SummaryRow>>>,
}

impl GroupedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket one table's rows. Only groups that receive a row get an entry.
    pub fn absorb(&mut self, table: SummaryTable) {
        let mut by_group: BTreeMap<GroupId, Vec<SummaryRow>> = BTreeMap::new();
        for row in table {
            by_group.entry(row.group_id.clone()).or_default().push(row);
        }
        for (id, fragment) in by_group {
            self.groups.entry(id).or_default().push(fragment);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &GroupId> {
        self.groups.keys()
    }

    /// Number of source tables that contributed to `id`.
    pub fn fragment_count(&self, id: &GroupId) -> usize {
        self.groups.get(id).map_or(0, Vec::len)
    }

    /// Flattened rows of one group in encounter order.
    pub fn rows(&self, id: &GroupId) -> Vec<&SummaryRow> {
        self.groups
            .get(id)
            .map(|frags| frags.iter().flatten().collect())
            .unwrap_or_default()
    }

    /// `(group, flattened rows)` for every populated group.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupId, Vec<&SummaryRow>)> {
        self.groups
            .iter()
            .map(|(id, frags)| (id, frags.iter().flatten().collect()))
    }

    pub fn total_rows(&self) -> usize {
        self.groups.values().flatten().map(Vec::len).sum()
    }
}

/// Bucket every row of every table by group id.
pub fn aggregate<I>(tables: I) -> GroupedResults
where
    I: IntoIterator<Item = SummaryTable>,
{
    let mut grouped = GroupedResults::new();
    for t in tables {
        grouped.absorb(t);
    }
    debug!("aggregated {} rows into {} groups", grouped.total_rows(), grouped.len());
    grouped
}

/// Matcher for one group's per-model rows. Compile once, apply per target.
#[derive(Clone, Debug)]
pub struct WinnerFilter {
    group_id: GroupId,
    pattern: Regex,
}

impl WinnerFilter {
    pub fn new(group_id: GroupId) -> Self {
        // GroupId is digits only, so the pattern is always valid.
        let pattern = Regex::new(&format!(r"TS{}_\d+-D\d+", regex::escape(group_id.as_str())))
            .expect("winner pattern from digit-only group id");
        Self { group_id, pattern }
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Matching rows of `table`, in order. Empty when nothing matches.
    pub fn apply(&self, table: &SummaryTable) -> SummaryTable {
        table.iter().filter(|r| self.matches(&r.name)).cloned().collect()
    }
}

/// One-shot form of [`WinnerFilter::apply`].
pub fn extract_winner(group_id: &GroupId, table: &SummaryTable) -> SummaryTable {
    WinnerFilter::new(group_id.clone()).apply(table)
}
