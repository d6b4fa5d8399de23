//! Aggregate figures over the saved-run history.

use std::collections::BTreeMap;

use serde::Serialize;

use impactor_sim::compute_physics;

use crate::history::SavedRun;

/// Locations listed in [`HistoryStatistics::popular_locations`].
pub const TOP_LOCATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatistics {
    pub total_runs: usize,
    /// Most used sites, most runs first, ties by name.
    pub popular_locations: Vec<LocationCount>,
    /// Mean impact energy; `None` without runs.
    pub average_energy_megatons: Option<f64>,
    pub average_crater_km: Option<f64>,
    /// Timestamp of the newest run.
    pub last_run_at: Option<u64>,
}

/// Summarize `runs`.
///
/// Averages use the unformatted physics recomputed from each run's
/// parameters; runs whose parameters no longer validate are left out of them.
pub fn summarize(runs: &[SavedRun]) -> HistoryStatistics {
    let mut by_location: BTreeMap<&str, usize> = BTreeMap::new();
    for run in runs {
        *by_location.entry(run.parameters.location.name.as_str()).or_default() += 1;
    }
    let mut popular_locations: Vec<LocationCount> = by_location
        .into_iter()
        .map(|(name, count)| LocationCount {
            name: name.to_string(),
            count,
        })
        .collect();
    popular_locations.sort_by(|a, b| b.count.cmp(&a.count));
    popular_locations.truncate(TOP_LOCATIONS);

    let physics: Vec<_> = runs
        .iter()
        .filter_map(|run| compute_physics(&run.parameters).ok())
        .collect();
    let average = |value: fn(&impactor_sim::ImpactPhysics) -> f64| {
        (!physics.is_empty())
            .then(|| physics.iter().map(value).sum::<f64>() / physics.len() as f64)
    };

    HistoryStatistics {
        total_runs: runs.len(),
        popular_locations,
        average_energy_megatons: average(|p| p.energy_megatons),
        average_crater_km: average(|p| p.crater_diameter_km),
        last_run_at: runs.iter().map(|r| r.timestamp).max(),
    }
}
