//! Effect report assembly: physics in, formatted and classified metrics out.

use impactor_core::enums::MetricKey;
use impactor_core::report::{EffectReport, Metric};
use impactor_core::types::ImpactParameters;
use impactor_core::ImpactError;

use crate::format::{fixed, grouped};
use crate::physics::{compute_physics, ImpactPhysics};
use crate::profiles::get_profile;
use crate::timeline::timeline;

/// Compute the full effect report for one impact.
///
/// Pure: identical parameters always produce an identical report.
pub fn compute_impact_effects(params: &ImpactParameters) -> Result<EffectReport, ImpactError> {
    let physics = compute_physics(params)?;
    Ok(build_report(params, &physics))
}

/// Format, classify and describe every metric of an already computed impact.
pub fn build_report(params: &ImpactParameters, physics: &ImpactPhysics) -> EffectReport {
    let mut report = EffectReport {
        timeline: timeline(),
        ..Default::default()
    };
    for key in MetricKey::ALL {
        report.insert(key, build_metric(key, params, physics));
    }
    report
}

fn build_metric(key: MetricKey, params: &ImpactParameters, physics: &ImpactPhysics) -> Metric {
    let profile = get_profile(key);
    let raw = physics.raw(key);
    Metric {
        value: format_value(key, raw),
        unit: profile.unit.to_string(),
        severity: profile.classify(raw),
        description: describe(key, params, physics),
        progress_percent: profile.progress(raw),
    }
}

fn format_value(key: MetricKey, raw: f64) -> String {
    match key {
        MetricKey::Energy
        | MetricKey::Temperature
        | MetricKey::CasualtiesImmediate
        | MetricKey::EconomicLoss
        | MetricKey::RefugeePopulation => grouped(raw),
        MetricKey::InfrastructureDamage => fixed(raw, 0),
        MetricKey::AtmosphericDust => fixed(raw, 2),
        MetricKey::CraterDiameter
        | MetricKey::FireballRadius
        | MetricKey::ShockwaveRadius
        | MetricKey::DebrisFieldRadius
        | MetricKey::SeismicMagnitude => fixed(raw, 1),
    }
}

fn describe(key: MetricKey, params: &ImpactParameters, p: &ImpactPhysics) -> String {
    let diameter = grouped(params.diameter_meters);
    let site = &params.location.name;
    match key {
        MetricKey::CraterDiameter => format!(
            "Crater excavated by a {diameter} m impactor at {site}, rim towering {} m above the surrounding ground.",
            grouped(p.crater_diameter_km * 1000.0 * 0.05)
        ),
        MetricKey::Energy => format!(
            "Kinetic energy released by a {} km/s impact, equal to {} Hiroshima bombs.",
            fixed(params.speed_km_per_sec, 1),
            grouped(p.energy_megatons * 1000.0 / 15.0)
        ),
        MetricKey::Temperature => format!(
            "Peak temperature at ground zero; at {} km/s rock and air are turned into superheated plasma.",
            fixed(params.speed_km_per_sec, 1)
        ),
        MetricKey::FireballRadius => {
            "Radius of the fireball igniting fires and causing severe burns.".to_string()
        }
        MetricKey::ShockwaveRadius => format!(
            "Air blast from a {} MT explosion collapses buildings out to this distance.",
            grouped(p.energy_megatons)
        ),
        MetricKey::DebrisFieldRadius => format!(
            "Area showered by ejecta thrown out of the {} km crater.",
            fixed(p.crater_diameter_km, 1)
        ),
        MetricKey::SeismicMagnitude => format!(
            "Earthquake equivalent of the impact, felt far beyond {site}."
        ),
        MetricKey::AtmosphericDust => format!(
            "Dust and vaporized rock from the {diameter} m impactor lofted into the atmosphere."
        ),
        MetricKey::CasualtiesImmediate => format!(
            "Immediate deaths from heat, blast and debris within {} km of ground zero.",
            grouped(p.shockwave_radius_km)
        ),
        MetricKey::InfrastructureDamage => {
            "Roads, power grids and buildings severely damaged within this radius.".to_string()
        }
        MetricKey::EconomicLoss => {
            "Estimated losses from destroyed infrastructure and disrupted trade.".to_string()
        }
        MetricKey::RefugeePopulation => format!(
            "People forced to evacuate across a {} km radius.",
            grouped(p.debris_radius_km)
        ),
    }
}
