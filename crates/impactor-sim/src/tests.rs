//! Tests for the formulas, classification, report assembly and catalogs.

use impactor_core::enums::*;
use impactor_core::types::{GeoLocation, ImpactParameters};
use impactor_core::ImpactError;

use crate::effects::compute_impact_effects;
use crate::locations::{find_location, locations};
use crate::physics::compute_physics;
use crate::profiles::{classify, get_profile};
use crate::scenario::{get_scenario, scenarios, ScenarioId};
use crate::timeline::TIMELINE;

fn params(diameter: f64, speed: f64, density: f64) -> ImpactParameters {
    ImpactParameters::new(diameter, speed, 45.0, density, GeoLocation::new("Test Site", 0.0, 0.0))
}

fn assert_close(actual: f64, expected: f64, rel: f64) {
    let err = ((actual - expected) / expected).abs();
    assert!(err < rel, "expected {expected}, got {actual} (rel err {err})");
}

// ---- Formulas ----

#[test]
fn test_continental_crisis_energy() {
    let p = compute_physics(&params(1000.0, 20.0, 2600.0)).unwrap();

    // 4/3·π·500³ m³ · 2600 kg/m³ · ½ · (20 km/s)² / 4.184e15 J/MT
    assert_close(p.energy_megatons, 65_074.417_617, 1e-8);
    assert_close(p.crater_diameter_km, 284.022_387, 1e-8);
    assert_close(p.temperature_c, 41_622.776_602, 1e-8);
    assert_close(p.shockwave_radius_km, 387.637_153, 1e-8);
    assert_close(p.seismic_magnitude, 6.813_410, 1e-6);
    assert_close(p.fireball_radius_km, 42.105_043_5, 1e-8);
}

#[test]
fn test_derived_quantities_follow_multipliers() {
    let p = compute_physics(&params(400.0, 18.0, 7800.0)).unwrap();

    assert_close(p.debris_radius_km, p.shockwave_radius_km * 3.0, 1e-12);
    assert_close(p.casualties, p.shockwave_radius_km.powi(2) * 100.0, 1e-12);
    assert_close(p.infrastructure_radius_km, p.shockwave_radius_km * 2.0, 1e-12);
    assert_close(p.economic_loss_busd, p.energy_megatons * 10.0, 1e-12);
    assert_close(p.displaced_population, p.debris_radius_km.powi(2) * 50.0, 1e-12);
}

#[test]
fn test_temperature_and_seismic_caps() {
    let p = compute_physics(&params(2000.0, 50.0, 7800.0)).unwrap();
    assert_eq!(p.temperature_c, 50_000.0);
    assert!(p.seismic_magnitude <= 10.0);

    // Large enough to push log10(MT) + 2 past the cap.
    let huge = compute_physics(&params(100_000.0, 50.0, 7800.0)).unwrap();
    assert_eq!(huge.seismic_magnitude, 10.0);
}

#[test]
fn test_angle_does_not_change_results() {
    let mut shallow = params(500.0, 20.0, 3500.0);
    shallow.angle_degrees = 15.0;
    let mut steep = shallow.clone();
    steep.angle_degrees = 90.0;

    assert_eq!(compute_physics(&shallow).unwrap(), compute_physics(&steep).unwrap());
}

// ---- Validation ----

#[test]
fn test_zero_diameter_rejected() {
    let err = compute_impact_effects(&params(0.0, 20.0, 2600.0)).unwrap_err();
    assert!(matches!(
        err,
        ImpactError::NonPositive {
            field: "diameterMeters",
            ..
        }
    ));
}

#[test]
fn test_zero_speed_rejected() {
    let err = compute_impact_effects(&params(100.0, 0.0, 2600.0)).unwrap_err();
    assert!(matches!(
        err,
        ImpactError::NonPositive {
            field: "speedKmPerSec",
            ..
        }
    ));
}

#[test]
fn test_negative_density_rejected() {
    let err = compute_impact_effects(&params(100.0, 20.0, -1.0)).unwrap_err();
    assert!(matches!(err, ImpactError::NonPositive { field: "density", .. }));
}

#[test]
fn test_underflowing_energy_rejected() {
    // Positive but so small the energy rounds to zero.
    let err = compute_impact_effects(&params(1e-120, 1e-120, 1e-120)).unwrap_err();
    assert!(matches!(err, ImpactError::DegenerateResult { .. }));
}

#[test]
fn test_overflowing_energy_rejected() {
    let err = compute_impact_effects(&params(1e120, 1e100, 1e100)).unwrap_err();
    assert!(matches!(err, ImpactError::DegenerateResult { .. }));
}

// ---- Severity ----

#[test]
fn test_energy_boundary_is_strict() {
    assert_eq!(classify(MetricKey::Energy, 50_000.0), Severity::Severe);
    assert_eq!(classify(MetricKey::Energy, 50_000.0001), Severity::Catastrophic);
    assert_eq!(classify(MetricKey::Energy, 10_000.0), Severity::Moderate);
    assert_eq!(classify(MetricKey::Energy, 1000.0), Severity::Minor);
}

#[test]
fn test_crater_tiers() {
    assert_eq!(classify(MetricKey::CraterDiameter, 0.5), Severity::Minor);
    assert_eq!(classify(MetricKey::CraterDiameter, 1.5), Severity::Moderate);
    assert_eq!(classify(MetricKey::CraterDiameter, 5.0), Severity::Moderate);
    assert_eq!(classify(MetricKey::CraterDiameter, 7.0), Severity::Severe);
    assert_eq!(classify(MetricKey::CraterDiameter, 10.1), Severity::Catastrophic);
}

#[test]
fn test_temperature_shockwave_seismic_tiers() {
    assert_eq!(classify(MetricKey::Temperature, 8000.0), Severity::Severe);
    assert_eq!(classify(MetricKey::Temperature, 8000.5), Severity::Catastrophic);
    assert_eq!(classify(MetricKey::Temperature, 2000.0), Severity::Moderate);

    assert_eq!(classify(MetricKey::ShockwaveRadius, 100.0), Severity::Minor);
    assert_eq!(classify(MetricKey::ShockwaveRadius, 501.0), Severity::Severe);
    assert_eq!(classify(MetricKey::ShockwaveRadius, 1001.0), Severity::Catastrophic);

    assert_eq!(classify(MetricKey::SeismicMagnitude, 4.0), Severity::Minor);
    assert_eq!(classify(MetricKey::SeismicMagnitude, 6.5), Severity::Severe);
    assert_eq!(classify(MetricKey::SeismicMagnitude, 7.1), Severity::Catastrophic);
}

#[test]
fn test_thresholds_are_ascending() {
    for key in MetricKey::ALL {
        let [a, b, c] = get_profile(key).thresholds;
        assert!(a < b && b < c, "{key:?} thresholds out of order");
    }
}

// ---- Progress ----

#[test]
fn test_progress_scales() {
    let crater = get_profile(MetricKey::CraterDiameter);
    assert_close(crater.progress(5.0), 25.0, 1e-12);
    assert_eq!(crater.progress(284.0), 100.0);

    let energy = get_profile(MetricKey::Energy);
    assert_close(energy.progress(65_074.4), 65.0744, 1e-8);
}

#[test]
fn test_progress_never_negative() {
    // Tiny impacts produce negative seismic magnitudes.
    let seismic = get_profile(MetricKey::SeismicMagnitude);
    assert_eq!(seismic.progress(-0.8), 0.0);
}

// ---- Report ----

#[test]
fn test_continental_crisis_report() {
    let report = compute_impact_effects(&get_scenario(ScenarioId::ContinentalCrisis).parameters()).unwrap();

    let crater = report.metric(MetricKey::CraterDiameter).unwrap();
    assert_eq!(crater.severity, Severity::Catastrophic);
    assert_eq!(crater.value, "284.0");
    assert_eq!(crater.unit, "km");
    assert_eq!(crater.progress_percent, 100.0);

    let energy = report.metric(MetricKey::Energy).unwrap();
    assert_eq!(energy.value, "65,074");
    assert_eq!(energy.severity, Severity::Catastrophic);

    let shockwave = report.metric(MetricKey::ShockwaveRadius).unwrap();
    assert_eq!(shockwave.value, "387.6");
    assert_eq!(shockwave.severity, Severity::Moderate);

    let seismic = report.metric(MetricKey::SeismicMagnitude).unwrap();
    assert_eq!(seismic.value, "6.8");
    assert_eq!(seismic.severity, Severity::Severe);

    assert_eq!(report.worst_severity(), Severity::Catastrophic);
}

#[test]
fn test_minimal_impact_never_catastrophic() {
    let report = compute_impact_effects(&params(10.0, 5.0, 1000.0)).unwrap();

    for (key, metric) in report.metrics() {
        assert_ne!(metric.severity, Severity::Catastrophic, "{key:?} was catastrophic");
    }
    assert_eq!(report.metric(MetricKey::CraterDiameter).unwrap().severity, Severity::Minor);
    assert_eq!(report.metric(MetricKey::Energy).unwrap().severity, Severity::Minor);
    // 2500 + 1000 * sqrt(10) is past the 3000 degree threshold.
    assert_eq!(report.metric(MetricKey::Temperature).unwrap().severity, Severity::Severe);
    assert_eq!(report.metric(MetricKey::SeismicMagnitude).unwrap().progress_percent, 0.0);
}

#[test]
fn test_report_has_every_metric_in_its_group() {
    let report = compute_impact_effects(&params(300.0, 25.0, 3500.0)).unwrap();
    for group in MetricGroup::ALL {
        assert_eq!(report.group(group).len(), 4);
    }
    for key in MetricKey::ALL {
        assert!(report.group(key.group()).contains_key(&key), "{key:?} missing");
    }
}

#[test]
fn test_descriptions_mention_location() {
    let scenario = get_scenario(ScenarioId::CityKiller);
    let report = compute_impact_effects(&scenario.parameters()).unwrap();
    let crater = report.metric(MetricKey::CraterDiameter).unwrap();
    assert!(crater.description.contains("New York City"));
    assert!(crater.description.contains("140 m"));
}

#[test]
fn test_timeline_is_fixed() {
    let small = compute_impact_effects(&params(10.0, 5.0, 1000.0)).unwrap();
    let large = compute_impact_effects(&params(2000.0, 50.0, 7800.0)).unwrap();

    assert_eq!(small.timeline, large.timeline);
    assert_eq!(small.timeline.len(), 9);
    assert_eq!(small.timeline[0].time, "0 seconds");
    assert_eq!(small.timeline[8].time, "1 year");
    assert_eq!(small.timeline[4].event, TIMELINE[4].1);
}

// ---- Catalogs ----

#[test]
fn test_every_scenario_within_input_ranges() {
    for scenario in scenarios() {
        let p = scenario.parameters();
        assert!(p.check_ranges().is_ok(), "{} out of range", scenario.name);
        assert!(compute_impact_effects(&p).is_ok());
    }
}

#[test]
fn test_scenario_parse() {
    assert_eq!("continental-crisis".parse::<ScenarioId>().unwrap(), ScenarioId::ContinentalCrisis);
    assert_eq!("Tunguska Event".parse::<ScenarioId>().unwrap(), ScenarioId::TunguskaEvent);
    assert_eq!("city_killer".parse::<ScenarioId>().unwrap(), ScenarioId::CityKiller);
    assert!(matches!(
        "doomsday".parse::<ScenarioId>(),
        Err(ImpactError::UnknownScenario(_))
    ));
}

#[test]
fn test_continental_crisis_preset() {
    let s = get_scenario(ScenarioId::ContinentalCrisis);
    assert_eq!(s.name, "Continental Crisis");
    assert_eq!(s.diameter_meters, 1000.0);
    assert_eq!(s.speed_km_per_sec, 20.0);
    assert_eq!(s.composition, Composition::Rocky);
    assert_eq!(s.parameters().density, 2600.0);
}

#[test]
fn test_scenario_locations_come_from_catalog() {
    let s = get_scenario(ScenarioId::ExtinctionLevel);
    assert_eq!(s.location, find_location("yucatan peninsula").unwrap());
}

#[test]
fn test_location_catalog() {
    let all = locations();
    assert_eq!(all.len(), 10);
    for loc in &all {
        assert!(loc.validate().is_ok(), "{} has invalid coordinates", loc.name);
    }
    let tokyo = find_location("TOKYO").unwrap();
    assert_eq!(tokyo.name, "Tokyo");
    assert!(matches!(find_location("Atlantis"), Err(ImpactError::UnknownLocation(_))));
}
