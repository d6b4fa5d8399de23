//! Per-metric classification profiles.
//!
//! Each metric is bucketed on its own raw value; there is no normalization
//! across metrics.

use impactor_core::enums::{MetricKey, Severity};

use crate::constants::*;

/// Unit, severity thresholds and display scale for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    pub unit: &'static str,
    /// Lower bounds (exclusive) of moderate, severe and catastrophic.
    pub thresholds: [f64; 3],
    /// Raw value that fills the progress bar.
    pub progress_scale: f64,
}

impl MetricProfile {
    /// Step function over the thresholds, strict greater-than at each edge.
    pub fn classify(&self, value: f64) -> Severity {
        let [moderate, severe, catastrophic] = self.thresholds;
        if value > catastrophic {
            Severity::Catastrophic
        } else if value > severe {
            Severity::Severe
        } else if value > moderate {
            Severity::Moderate
        } else {
            Severity::Minor
        }
    }

    /// Bar fill in [0, 100].
    pub fn progress(&self, value: f64) -> f64 {
        let percent = value / self.progress_scale * 100.0;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }
}

/// Get the profile for a given metric.
pub fn get_profile(key: MetricKey) -> MetricProfile {
    match key {
        MetricKey::CraterDiameter => MetricProfile {
            unit: "km",
            thresholds: CRATER_THRESHOLDS_KM,
            progress_scale: CRATER_SCALE_KM,
        },
        MetricKey::Energy => MetricProfile {
            unit: "megatons TNT",
            thresholds: ENERGY_THRESHOLDS_MT,
            progress_scale: ENERGY_SCALE_MT,
        },
        MetricKey::Temperature => MetricProfile {
            unit: "°C",
            thresholds: TEMPERATURE_THRESHOLDS_C,
            progress_scale: TEMPERATURE_SCALE_C,
        },
        MetricKey::FireballRadius => MetricProfile {
            unit: "km",
            thresholds: FIREBALL_THRESHOLDS_KM,
            progress_scale: FIREBALL_SCALE_KM,
        },
        MetricKey::ShockwaveRadius => MetricProfile {
            unit: "km",
            thresholds: SHOCKWAVE_THRESHOLDS_KM,
            progress_scale: SHOCKWAVE_SCALE_KM,
        },
        MetricKey::DebrisFieldRadius => MetricProfile {
            unit: "km",
            thresholds: DEBRIS_THRESHOLDS_KM,
            progress_scale: DEBRIS_SCALE_KM,
        },
        MetricKey::SeismicMagnitude => MetricProfile {
            unit: "magnitude",
            thresholds: SEISMIC_THRESHOLDS,
            progress_scale: SEISMIC_SCALE,
        },
        MetricKey::AtmosphericDust => MetricProfile {
            unit: "billion tons",
            thresholds: DUST_THRESHOLDS_GT,
            progress_scale: DUST_SCALE_GT,
        },
        MetricKey::CasualtiesImmediate => MetricProfile {
            unit: "estimated casualties",
            thresholds: CASUALTY_THRESHOLDS,
            progress_scale: CASUALTY_SCALE,
        },
        MetricKey::InfrastructureDamage => MetricProfile {
            unit: "km radius affected",
            thresholds: INFRASTRUCTURE_THRESHOLDS_KM,
            progress_scale: INFRASTRUCTURE_SCALE_KM,
        },
        MetricKey::EconomicLoss => MetricProfile {
            unit: "billion USD",
            thresholds: ECONOMIC_THRESHOLDS_BUSD,
            progress_scale: ECONOMIC_SCALE_BUSD,
        },
        MetricKey::RefugeePopulation => MetricProfile {
            unit: "displaced persons",
            thresholds: DISPLACED_THRESHOLDS,
            progress_scale: DISPLACED_SCALE,
        },
    }
}

/// Severity of a raw metric value.
pub fn classify(key: MetricKey, value: f64) -> Severity {
    get_profile(key).classify(value)
}
