//! Tests for the key-value stores and saved-run history.

use std::cell::{Cell, RefCell};

use impactor_core::enums::{Composition, MetricKey, Severity};
use impactor_core::report::EffectReport;
use impactor_core::types::ImpactParameters;
use impactor_sim::scenario::{get_scenario, ScenarioId};
use impactor_sim::{compute_impact_effects, compute_physics};

use crate::compare::COMPARED_METRICS;
use crate::dir_store::DirStore;
use crate::error::StoreError;
use crate::history::{
    HistoryDocument, RunDetails, RunHistory, RunQuery, RunUpdate, SavedRun, DEFAULT_HISTORY_KEY,
};
use crate::store::{KeyValueStore, MemoryStore};

fn preset(id: ScenarioId) -> (ImpactParameters, EffectReport) {
    let params = get_scenario(id).parameters();
    let report = compute_impact_effects(&params).unwrap();
    (params, report)
}

fn record(history: &mut RunHistory<impl KeyValueStore>, name: &str, timestamp: u64) -> SavedRun {
    let (params, report) = preset(ScenarioId::CityKiller);
    history.record(name, params, report, timestamp).unwrap()
}

// ---- MemoryStore ----

#[test]
fn test_memory_store_get_put_remove() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("a").unwrap(), None);

    store.put("a", "1".to_string()).unwrap();
    store.put("a", "2".to_string()).unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
    assert_eq!(store.len(), 1);

    store.remove("a").unwrap();
    store.remove("a").unwrap();
    assert!(store.is_empty());
}

// ---- DirStore ----

#[test]
fn test_dir_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::new(dir.path().join("nested"));

    assert_eq!(store.get("history").unwrap(), None);
    store.put("history", "{\"x\":1}".to_string()).unwrap();
    assert!(dir.path().join("nested").join("history.json").exists());
    assert_eq!(store.get("history").unwrap().as_deref(), Some("{\"x\":1}"));

    store.remove("history").unwrap();
    assert_eq!(store.get("history").unwrap(), None);
    store.remove("history").unwrap();
}

#[test]
fn test_dir_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirStore::new(dir.path());

    for key in ["../escape", "a/b", "", ".hidden"] {
        assert!(
            matches!(store.put(key, String::new()), Err(StoreError::InvalidKey(_))),
            "{key:?} should be rejected"
        );
    }
}

// ---- RunHistory ----

#[test]
fn test_record_and_get() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 7);
    let run = record(&mut history, "first", 1000);

    assert!(run.id.starts_with("run-1000-"));
    assert_eq!(run.id.len(), "run-1000-".len() + 8);

    let loaded = history.get(&run.id).unwrap().unwrap();
    assert_eq!(loaded, run);
    assert_eq!(loaded.parameters.location.name, "New York City");
    assert!(history.get("run-0-missing").unwrap().is_none());
}

#[test]
fn test_seeded_ids_are_reproducible() {
    let mut a = RunHistory::with_seed(MemoryStore::new(), 42);
    let mut b = RunHistory::with_seed(MemoryStore::new(), 42);
    for ts in [1, 2, 3] {
        assert_eq!(record(&mut a, "x", ts).id, record(&mut b, "x", ts).id);
    }
}

#[test]
fn test_list_newest_first() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 1);
    record(&mut history, "early", 1000);
    record(&mut history, "late", 3000);
    record(&mut history, "middle", 2000);

    let names: Vec<String> = history.list().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["late", "middle", "early"]);
}

#[test]
fn test_history_is_bounded() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 1).with_max_entries(3);
    for ts in 1..=5 {
        record(&mut history, &format!("run {ts}"), ts);
    }

    let runs = history.list().unwrap();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0].timestamp, 5);
    assert_eq!(runs[2].timestamp, 3);
}

#[test]
fn test_trim_drops_oldest_timestamps_not_oldest_inserts() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 1).with_max_entries(2);
    record(&mut history, "newest", 3000);
    record(&mut history, "oldest", 1000);
    record(&mut history, "middle", 2000);

    let names: Vec<String> = history.list().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["newest", "middle"]);

    // Stored order already matches the listing.
    let stored: Vec<String> = history.load().unwrap().runs.into_iter().map(|r| r.name).collect();
    assert_eq!(stored, names);
}

#[test]
fn test_revision_increments_per_write() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 1);
    assert_eq!(history.load().unwrap().revision, 0);
    let run = record(&mut history, "a", 1);
    record(&mut history, "b", 2);
    history.delete(&run.id).unwrap();
    assert_eq!(history.load().unwrap().revision, 3);
}

#[test]
fn test_delete_and_clear() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 3);
    let keep = record(&mut history, "keep", 1);
    let drop = record(&mut history, "drop", 2);

    assert!(history.delete(&drop.id).unwrap());
    assert!(!history.delete(&drop.id).unwrap());
    assert_eq!(history.list().unwrap(), vec![keep]);

    history.clear().unwrap();
    assert!(history.list().unwrap().is_empty());
    assert!(history.store().is_empty());
}

#[test]
fn test_summaries() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 3);
    let (params, report) = preset(ScenarioId::ContinentalCrisis);
    history.record("crisis", params, report, 50).unwrap();

    let summaries = history.summaries().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].location, "Paris");
    assert_eq!(summaries[0].worst_severity, Severity::Catastrophic);
}

#[test]
fn test_corrupt_document_reported() {
    let mut store = MemoryStore::new();
    store.put(DEFAULT_HISTORY_KEY, "not json".to_string()).unwrap();
    let history = RunHistory::with_seed(store, 1);

    assert!(matches!(history.list(), Err(StoreError::Corrupt { .. })));
}

#[test]
fn test_custom_key_isolated() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 1).with_key("other-history");
    record(&mut history, "a", 1);

    let store = history.into_store();
    assert!(store.get(DEFAULT_HISTORY_KEY).unwrap().is_none());
    assert!(store.get("other-history").unwrap().is_some());
}

#[test]
fn test_history_persists_across_dir_store_instances() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = RunHistory::with_seed(DirStore::new(dir.path()), 5);
    let run = record(&mut first, "persisted", 99);

    let second = RunHistory::new(DirStore::new(dir.path()));
    assert_eq!(second.get(&run.id).unwrap(), Some(run));
}

/// Store where another client writes the history during the Nth read.
struct RacingStore {
    inner: RefCell<MemoryStore>,
    reads: Cell<u32>,
    interfere_on_read: u32,
    foreign: RefCell<Option<String>>,
}

impl KeyValueStore for RacingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.reads.set(self.reads.get() + 1);
        if self.reads.get() == self.interfere_on_read {
            if let Some(json) = self.foreign.borrow_mut().take() {
                self.inner.borrow_mut().put(key, json)?;
            }
        }
        self.inner.borrow().get(key)
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.get_mut().put(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.get_mut().remove(key)
    }
}

#[test]
fn test_concurrent_write_is_not_lost() {
    let (params, report) = preset(ScenarioId::TunguskaEvent);
    let foreign_run = SavedRun {
        id: "run-10-deadbeef".to_string(),
        name: "other tab".to_string(),
        description: None,
        tags: Vec::new(),
        timestamp: 10,
        updated_at: None,
        parameters: params,
        report,
    };
    let foreign_doc = HistoryDocument {
        revision: 1,
        runs: vec![foreign_run.clone()],
    };
    let store = RacingStore {
        inner: RefCell::new(MemoryStore::new()),
        reads: Cell::new(0),
        // Read 1 loads the document, read 2 is the revision check.
        interfere_on_read: 2,
        foreign: RefCell::new(Some(serde_json::to_string(&foreign_doc).unwrap())),
    };

    let mut history = RunHistory::with_seed(store, 9);
    let mine = record(&mut history, "this tab", 20);

    let runs = history.list().unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].id, mine.id);
    assert_eq!(runs[1], foreign_run);
    assert_eq!(history.load().unwrap().revision, 2);
}

// ---- Metadata, queries, comparison, statistics ----

fn record_tagged(
    history: &mut RunHistory<impl KeyValueStore>,
    id: ScenarioId,
    tags: &[&str],
    timestamp: u64,
) -> SavedRun {
    let (params, report) = preset(id);
    let details = RunDetails {
        name: get_scenario(id).name.to_string(),
        description: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };
    history.record_with(details, params, report, timestamp).unwrap()
}

#[test]
fn test_history_json_is_camel_case() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 2);
    let run = record(&mut history, "a", 1);
    let json = history.store().get(DEFAULT_HISTORY_KEY).unwrap().unwrap();
    assert!(json.contains("\"humanImpact\""));
    assert!(!json.contains("human_impact"));

    let summary = serde_json::to_value(crate::RunSummary::from(&run)).unwrap();
    assert!(summary.get("worstSeverity").is_some());
    assert!(summary.get("worst_severity").is_none());
}

#[test]
fn test_record_with_normalizes_details() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 4);
    let (params, report) = preset(ScenarioId::CityKiller);
    let details = RunDetails {
        name: "tagged".to_string(),
        description: Some("   ".to_string()),
        tags: vec![" iron ".to_string(), "".to_string(), "Iron".to_string(), "city".to_string()],
    };
    let run = history.record_with(details, params, report, 5).unwrap();

    assert_eq!(run.tags, ["iron", "city"]);
    assert_eq!(run.description, None);
    assert_eq!(run.updated_at, None);
    assert!(run.has_tag("CITY"));
}

#[test]
fn test_update_changes_only_given_fields() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 5);
    let run = record_tagged(&mut history, ScenarioId::TunguskaEvent, &["siberia"], 10);

    let updated = history
        .update(
            &run.id,
            RunUpdate {
                description: Some("Forest flattened".to_string()),
                ..Default::default()
            },
            20,
        )
        .unwrap();
    assert_eq!(updated.name, run.name);
    assert_eq!(updated.tags, ["siberia"]);
    assert_eq!(updated.description.as_deref(), Some("Forest flattened"));
    assert_eq!(updated.updated_at, Some(20));
    assert_eq!(updated.timestamp, 10);

    let renamed = history
        .update(
            &run.id,
            RunUpdate {
                name: Some("1908".to_string()),
                description: Some(String::new()),
                tags: Some(vec![]),
            },
            30,
        )
        .unwrap();
    assert_eq!(renamed.name, "1908");
    assert_eq!(renamed.description, None);
    assert!(renamed.tags.is_empty());
    assert_eq!(history.get(&run.id).unwrap(), Some(renamed));
}

#[test]
fn test_update_unknown_run_does_not_write() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 5);
    record(&mut history, "a", 1);
    let revision = history.load().unwrap().revision;

    let result = history.update("run-0-00000000", RunUpdate::default(), 2);
    assert!(matches!(result, Err(StoreError::RunNotFound(ref id)) if id == "run-0-00000000"));
    assert_eq!(history.load().unwrap().revision, revision);
}

#[test]
fn test_query_limit_and_tag() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 6);
    record_tagged(&mut history, ScenarioId::CityKiller, &["urban"], 1);
    record_tagged(&mut history, ScenarioId::TunguskaEvent, &["remote"], 2);
    record_tagged(&mut history, ScenarioId::RegionalDevastation, &["Urban"], 3);

    assert_eq!(history.query(&RunQuery::default()).unwrap().len(), 3);

    let urban = history
        .query(&RunQuery {
            tag: Some("urban".to_string()),
            ..Default::default()
        })
        .unwrap();
    let stamps: Vec<u64> = urban.iter().map(|r| r.timestamp).collect();
    assert_eq!(stamps, [3, 1]);

    let newest = history
        .query(&RunQuery {
            limit: Some(1),
            tag: Some("urban".to_string()),
        })
        .unwrap();
    assert_eq!(newest.len(), 1);
    assert_eq!(newest[0].timestamp, 3);
}

#[test]
fn test_compare_rejects_bad_counts_and_unknown_ids() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 7);
    let a = record(&mut history, "a", 1);

    assert!(matches!(
        history.compare(&[a.id.as_str()]),
        Err(StoreError::CompareCount { count: 1, min: 2, max: 5 })
    ));
    let six = vec![a.id.clone(); 6];
    assert!(matches!(history.compare(&six), Err(StoreError::CompareCount { count: 6, .. })));
    assert!(matches!(
        history.compare(&[a.id.as_str(), "run-9-ffffffff"]),
        Err(StoreError::RunNotFound(_))
    ));
}

#[test]
fn test_compare_lines_up_metrics_in_given_order() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 8);
    let small = record_tagged(&mut history, ScenarioId::CityKiller, &[], 1);
    let large = record_tagged(&mut history, ScenarioId::ContinentalCrisis, &[], 2);

    let comparison = history.compare(&[&small.id, &large.id]).unwrap();

    assert_eq!(comparison.runs, vec![small.clone(), large.clone()]);
    let metrics: Vec<MetricKey> = comparison.metrics.iter().map(|m| m.metric).collect();
    assert_eq!(metrics, COMPARED_METRICS);

    let energy = &comparison.metrics[1];
    assert_eq!(energy.values[0].run_id, small.id);
    assert_eq!(energy.values[1].run_id, large.id);
    assert_eq!(energy.values[1].value, "65,074");
    assert_eq!(energy.values[1].severity, Severity::Catastrophic);

    let summary = &comparison.summary;
    assert_eq!(summary.total_compared, 2);
    assert_eq!(summary.locations, ["New York City", "Paris"]);
    assert_eq!(summary.compositions, [Composition::Rocky]);
    assert_eq!(summary.worst_severity, Severity::Catastrophic);
}

#[test]
fn test_statistics_empty_history() {
    let history = RunHistory::with_seed(MemoryStore::new(), 9);
    let stats = history.statistics().unwrap();
    assert_eq!(stats.total_runs, 0);
    assert!(stats.popular_locations.is_empty());
    assert_eq!(stats.average_energy_megatons, None);
    assert_eq!(stats.average_crater_km, None);
    assert_eq!(stats.last_run_at, None);
}

#[test]
fn test_statistics_counts_locations_and_averages() {
    let mut history = RunHistory::with_seed(MemoryStore::new(), 9);
    record_tagged(&mut history, ScenarioId::CityKiller, &[], 30);
    record_tagged(&mut history, ScenarioId::ContinentalCrisis, &[], 10);
    record(&mut history, "again", 20);

    let stats = history.statistics().unwrap();
    assert_eq!(stats.total_runs, 3);
    assert_eq!(stats.last_run_at, Some(30));
    assert_eq!(stats.popular_locations[0].name, "New York City");
    assert_eq!(stats.popular_locations[0].count, 2);
    assert_eq!(stats.popular_locations[1].name, "Paris");

    let city = compute_physics(&get_scenario(ScenarioId::CityKiller).parameters()).unwrap();
    let crisis = compute_physics(&get_scenario(ScenarioId::ContinentalCrisis).parameters()).unwrap();
    let expected = (2.0 * city.energy_megatons + crisis.energy_megatons) / 3.0;
    let actual = stats.average_energy_megatons.unwrap();
    assert!((actual - expected).abs() <= expected * 1e-12);
    assert!(stats.average_crater_km.unwrap() > city.crater_diameter_km);
}
