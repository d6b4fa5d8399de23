//! Effect report: the complete output of one calculation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{MetricGroup, MetricKey, Severity};

/// One displayed metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Formatted number.
    pub value: String,
    pub unit: String,
    pub severity: Severity,
    pub description: String,
    /// Display bar fill, always within [0, 100].
    pub progress_percent: f64,
}

/// Metrics of one group keyed by metric, iterated in display order.
pub type MetricMap = BTreeMap<MetricKey, Metric>;

/// A fixed narrative checkpoint of the aftermath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub time: String,
    pub event: String,
}

/// Categorized effects of a single impact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectReport {
    pub immediate: MetricMap,
    pub environmental: MetricMap,
    pub human_impact: MetricMap,
    pub timeline: Vec<TimelineEntry>,
}

impl EffectReport {
    pub fn group(&self, group: MetricGroup) -> &MetricMap {
        match group {
            MetricGroup::Immediate => &self.immediate,
            MetricGroup::Environmental => &self.environmental,
            MetricGroup::HumanImpact => &self.human_impact,
        }
    }

    /// Insert a metric into the group its key belongs to.
    pub fn insert(&mut self, key: MetricKey, metric: Metric) {
        let map = match key.group() {
            MetricGroup::Immediate => &mut self.immediate,
            MetricGroup::Environmental => &mut self.environmental,
            MetricGroup::HumanImpact => &mut self.human_impact,
        };
        map.insert(key, metric);
    }

    pub fn metric(&self, key: MetricKey) -> Option<&Metric> {
        self.group(key.group()).get(&key)
    }

    /// All metrics across groups in display order.
    pub fn metrics(&self) -> impl Iterator<Item = (MetricKey, &Metric)> {
        MetricGroup::ALL
            .into_iter()
            .flat_map(move |g| self.group(g).iter().map(|(k, m)| (*k, m)))
    }

    /// Highest severity in the report.
    pub fn worst_severity(&self) -> Severity {
        self.metrics()
            .map(|(_, m)| m.severity)
            .max()
            .unwrap_or_default()
    }
}
