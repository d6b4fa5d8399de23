//! Side-by-side comparison of saved runs.

use serde::Serialize;

use impactor_core::enums::{Composition, MetricKey, Severity};

use crate::history::SavedRun;

/// Fewest runs a comparison accepts.
pub const MIN_COMPARED: usize = 2;
/// Most runs a comparison accepts.
pub const MAX_COMPARED: usize = 5;

/// Metrics lined up in a comparison, in display order.
pub const COMPARED_METRICS: [MetricKey; 4] = [
    MetricKey::CraterDiameter,
    MetricKey::Energy,
    MetricKey::CasualtiesImmediate,
    MetricKey::ShockwaveRadius,
];

/// One run's reading of a compared metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedValue {
    pub run_id: String,
    pub name: String,
    pub value: String,
    pub unit: String,
    pub severity: Severity,
}

/// A metric across every compared run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub metric: MetricKey,
    pub values: Vec<ComparedValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_compared: usize,
    /// Distinct impact sites, sorted.
    pub locations: Vec<String>,
    /// Compositions whose density matches a run's input.
    pub compositions: Vec<Composition>,
    pub worst_severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunComparison {
    pub runs: Vec<SavedRun>,
    pub metrics: Vec<MetricComparison>,
    pub summary: ComparisonSummary,
}

/// Line up the compared metrics of `runs`, keeping their order.
pub fn compare_runs(runs: Vec<SavedRun>) -> RunComparison {
    let metrics = COMPARED_METRICS
        .into_iter()
        .map(|metric| MetricComparison {
            metric,
            values: runs
                .iter()
                .filter_map(|run| {
                    run.report.metric(metric).map(|m| ComparedValue {
                        run_id: run.id.clone(),
                        name: run.name.clone(),
                        value: m.value.clone(),
                        unit: m.unit.clone(),
                        severity: m.severity,
                    })
                })
                .collect(),
        })
        .collect();

    let mut locations: Vec<String> = runs
        .iter()
        .map(|r| r.parameters.location.name.clone())
        .collect();
    locations.sort();
    locations.dedup();

    let compositions = Composition::ALL
        .into_iter()
        .filter(|c| runs.iter().any(|r| r.parameters.density == c.density()))
        .collect();

    let summary = ComparisonSummary {
        total_compared: runs.len(),
        locations,
        compositions,
        worst_severity: runs
            .iter()
            .map(|r| r.report.worst_severity())
            .max()
            .unwrap_or_default(),
    };

    RunComparison {
        runs,
        metrics,
        summary,
    }
}
