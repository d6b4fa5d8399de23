//! Saved-run history kept as a single JSON document.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use impactor_core::enums::Severity;
use impactor_core::report::EffectReport;
use impactor_core::types::ImpactParameters;

use crate::compare::{compare_runs, RunComparison, MAX_COMPARED, MIN_COMPARED};
use crate::error::StoreError;
use crate::stats::{summarize, HistoryStatistics};
use crate::store::KeyValueStore;

/// Store key the history document lives under.
pub const DEFAULT_HISTORY_KEY: &str = "impact-history";

/// Runs kept before the oldest are dropped.
pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// Re-reads attempted when another writer changed the document mid-update.
const MAX_UPDATE_ATTEMPTS: u32 = 3;

/// One recorded calculation: the input and the report it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRun {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Caller-supplied time of the run (seconds since the Unix epoch).
    pub timestamp: u64,
    /// Time of the last metadata edit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
    pub parameters: ImpactParameters,
    pub report: EffectReport,
}

impl SavedRun {
    /// Case-insensitive tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    fn apply(&mut self, changes: &RunUpdate, timestamp: u64) {
        if let Some(ref name) = changes.name {
            self.name = name.clone();
        }
        if let Some(ref description) = changes.description {
            self.description = non_empty(description);
        }
        if let Some(ref tags) = changes.tags {
            self.tags = normalize_tags(tags);
        }
        self.updated_at = Some(timestamp);
    }
}

/// Lightweight listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub id: String,
    pub name: String,
    pub timestamp: u64,
    pub location: String,
    pub tags: Vec<String>,
    pub worst_severity: Severity,
}

impl From<&SavedRun> for RunSummary {
    fn from(run: &SavedRun) -> Self {
        Self {
            id: run.id.clone(),
            name: run.name.clone(),
            timestamp: run.timestamp,
            location: run.parameters.location.name.clone(),
            tags: run.tags.clone(),
            worst_severity: run.report.worst_severity(),
        }
    }
}

/// Metadata given to a run when it is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunDetails {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl RunDetails {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Metadata edit. `None` leaves a field unchanged; an empty description clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl RunUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.tags.is_none()
    }
}

/// Listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunQuery {
    /// Keep at most this many runs, newest first.
    pub limit: Option<usize>,
    /// Keep only runs carrying this tag.
    pub tag: Option<String>,
}

/// The stored document. `revision` increments on every write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDocument {
    pub revision: u64,
    /// Newest first.
    pub runs: Vec<SavedRun>,
}

/// Saved runs on top of any [`KeyValueStore`].
pub struct RunHistory<S: KeyValueStore> {
    store: S,
    key: String,
    max_entries: usize,
    rng: ChaCha8Rng,
}

impl<S: KeyValueStore> RunHistory<S> {
    /// History with randomly seeded run ids.
    pub fn new(store: S) -> Self {
        Self::with_seed(store, rand::random())
    }

    /// History whose run ids are reproducible for a given seed.
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            store,
            key: DEFAULT_HISTORY_KEY.to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Keep at most `max_entries` runs (at least one).
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Record a run under a bare name.
    pub fn record(
        &mut self,
        name: impl Into<String>,
        parameters: ImpactParameters,
        report: EffectReport,
        timestamp: u64,
    ) -> Result<SavedRun, StoreError> {
        self.record_with(RunDetails::named(name), parameters, report, timestamp)
    }

    /// Record a run, then drop the runs with the oldest timestamps beyond the limit.
    pub fn record_with(
        &mut self,
        details: RunDetails,
        parameters: ImpactParameters,
        report: EffectReport,
        timestamp: u64,
    ) -> Result<SavedRun, StoreError> {
        let run = SavedRun {
            id: format!("run-{timestamp}-{:08x}", self.rng.gen::<u32>()),
            name: details.name,
            description: details.description.as_deref().and_then(non_empty),
            tags: normalize_tags(&details.tags),
            timestamp,
            updated_at: None,
            parameters,
            report,
        };
        let max_entries = self.max_entries;
        let entry = run.clone();
        self.modify(|doc| {
            doc.runs.retain(|r| r.id != entry.id);
            doc.runs.insert(0, entry.clone());
            // Stable, so a new run stays ahead of older entries with the same timestamp.
            doc.runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            doc.runs.truncate(max_entries);
        })?;
        log::info!("Recorded run {} ({})", run.id, run.name);
        Ok(run)
    }

    /// All runs, newest first.
    pub fn list(&self) -> Result<Vec<SavedRun>, StoreError> {
        let mut runs = self.load()?.runs;
        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }

    /// Runs matching `query`, newest first.
    pub fn query(&self, query: &RunQuery) -> Result<Vec<SavedRun>, StoreError> {
        let runs = self
            .list()?
            .into_iter()
            .filter(|r| query.tag.as_deref().map_or(true, |t| r.has_tag(t)))
            .take(query.limit.unwrap_or(usize::MAX))
            .collect();
        Ok(runs)
    }

    /// Summaries of all runs, newest first.
    pub fn summaries(&self) -> Result<Vec<RunSummary>, StoreError> {
        Ok(self.list()?.iter().map(RunSummary::from).collect())
    }

    /// Edit a run's name, description or tags.
    pub fn update(
        &mut self,
        id: &str,
        changes: RunUpdate,
        timestamp: u64,
    ) -> Result<SavedRun, StoreError> {
        if self.get(id)?.is_none() {
            return Err(StoreError::RunNotFound(id.to_string()));
        }
        let mut updated = None;
        self.modify(|doc| {
            updated = doc.runs.iter_mut().find(|r| r.id == id).map(|run| {
                run.apply(&changes, timestamp);
                run.clone()
            });
        })?;
        let run = updated.ok_or_else(|| StoreError::RunNotFound(id.to_string()))?;
        log::info!("Updated run {}", run.id);
        Ok(run)
    }

    /// Side-by-side view of 2 to 5 saved runs, in the order given.
    pub fn compare<I: AsRef<str>>(&self, ids: &[I]) -> Result<RunComparison, StoreError> {
        if !(MIN_COMPARED..=MAX_COMPARED).contains(&ids.len()) {
            return Err(StoreError::CompareCount {
                count: ids.len(),
                min: MIN_COMPARED,
                max: MAX_COMPARED,
            });
        }
        let doc = self.load()?;
        let runs = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                doc.runs
                    .iter()
                    .find(|r| r.id == id)
                    .cloned()
                    .ok_or_else(|| StoreError::RunNotFound(id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(compare_runs(runs))
    }

    /// Aggregate figures over every saved run.
    pub fn statistics(&self) -> Result<HistoryStatistics, StoreError> {
        Ok(summarize(&self.load()?.runs))
    }

    pub fn get(&self, id: &str) -> Result<Option<SavedRun>, StoreError> {
        Ok(self.load()?.runs.into_iter().find(|r| r.id == id))
    }

    /// Delete a run. Returns whether it existed.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut removed = false;
        self.modify(|doc| {
            let before = doc.runs.len();
            doc.runs.retain(|r| r.id != id);
            removed = doc.runs.len() != before;
        })?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }

    /// Current document, or an empty one if nothing is stored yet.
    pub fn load(&self) -> Result<HistoryDocument, StoreError> {
        match self.store.get(&self.key)? {
            Some(json) => serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
                key: self.key.clone(),
                source,
            }),
            None => Ok(HistoryDocument::default()),
        }
    }

    /// Optimistic read-modify-write.
    ///
    /// The edit is re-applied on a fresh read if the revision moved underneath
    /// it; after the last attempt the write goes through anyway.
    fn modify(&mut self, mut edit: impl FnMut(&mut HistoryDocument)) -> Result<(), StoreError> {
        let mut attempt = 1;
        loop {
            let mut doc = self.load()?;
            let read_revision = doc.revision;
            edit(&mut doc);

            let current = self.load()?.revision;
            if current != read_revision && attempt < MAX_UPDATE_ATTEMPTS {
                log::debug!(
                    "History revision moved from {read_revision} to {current}, retrying (attempt {attempt})"
                );
                attempt += 1;
                continue;
            }
            if current != read_revision {
                log::warn!("History still changing after {attempt} attempts, overwriting");
            }

            doc.revision = current.max(read_revision) + 1;
            let json = serde_json::to_string(&doc).map_err(StoreError::Serialize)?;
            return self.store.put(&self.key, json);
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Trimmed, non-empty, first occurrence kept (case-insensitive).
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !out.iter().any(|seen| seen.eq_ignore_ascii_case(tag)) {
            out.push(tag.to_string());
        }
    }
    out
}
