//! Raw physical quantities derived from the impact parameters.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use impactor_core::constants::{JOULES_PER_MEGATON, METERS_PER_KM};
use impactor_core::enums::MetricKey;
use impactor_core::types::ImpactParameters;
use impactor_core::ImpactError;

use crate::constants::*;

/// Unformatted results of the impact formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactPhysics {
    /// Impactor mass (kg).
    pub mass_kg: f64,
    /// Impact velocity (m/s).
    pub velocity_m_s: f64,
    pub kinetic_energy_joules: f64,
    pub energy_megatons: f64,
    pub crater_diameter_km: f64,
    /// Peak temperature (°C), capped.
    pub temperature_c: f64,
    pub shockwave_radius_km: f64,
    /// Richter-like magnitude, capped. Negative for very small impacts.
    pub seismic_magnitude: f64,
    pub debris_radius_km: f64,
    pub fireball_radius_km: f64,
    /// Lofted dust (billion tons).
    pub atmospheric_dust_gt: f64,
    pub casualties: f64,
    pub infrastructure_radius_km: f64,
    /// Economic loss (billion USD).
    pub economic_loss_busd: f64,
    pub displaced_population: f64,
}

impl ImpactPhysics {
    /// The raw quantity a metric is classified and scaled on.
    pub fn raw(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::CraterDiameter => self.crater_diameter_km,
            MetricKey::Energy => self.energy_megatons,
            MetricKey::Temperature => self.temperature_c,
            MetricKey::FireballRadius => self.fireball_radius_km,
            MetricKey::ShockwaveRadius => self.shockwave_radius_km,
            MetricKey::DebrisFieldRadius => self.debris_radius_km,
            MetricKey::SeismicMagnitude => self.seismic_magnitude,
            MetricKey::AtmosphericDust => self.atmospheric_dust_gt,
            MetricKey::CasualtiesImmediate => self.casualties,
            MetricKey::InfrastructureDamage => self.infrastructure_radius_km,
            MetricKey::EconomicLoss => self.economic_loss_busd,
            MetricKey::RefugeePopulation => self.displaced_population,
        }
    }
}

/// Evaluate the impact formulas.
///
/// Rejects invalid parameters up front, and rejects valid-but-extreme input
/// whose energy underflows to zero or overflows, so no NaN or infinity ever
/// reaches a report.
pub fn compute_physics(params: &ImpactParameters) -> Result<ImpactPhysics, ImpactError> {
    params.validate()?;

    let diameter = params.diameter_meters;

    // Sphere of the given diameter.
    let radius = diameter / 2.0;
    let volume = 4.0 / 3.0 * PI * radius.powi(3);
    let mass_kg = volume * params.density;

    let velocity_m_s = params.speed_km_per_sec * METERS_PER_KM;
    let kinetic_energy_joules = 0.5 * mass_kg * velocity_m_s.powi(2);
    let energy_megatons = kinetic_energy_joules / JOULES_PER_MEGATON;

    if !(energy_megatons.is_finite() && energy_megatons > 0.0) {
        return Err(ImpactError::DegenerateResult {
            quantity: "energyMegatons",
            value: energy_megatons,
        });
    }

    let crater_diameter_km = (energy_megatons / CRATER_ENERGY_DIVISOR).powf(CRATER_EXPONENT)
        * diameter
        * CRATER_DIAMETER_FACTOR;
    let temperature_c = (velocity_m_s * TEMPERATURE_VELOCITY_FACTOR
        + diameter.sqrt() * TEMPERATURE_DIAMETER_FACTOR)
        .min(TEMPERATURE_CAP_C);
    let shockwave_radius_km = energy_megatons.powf(SHOCKWAVE_EXPONENT) * SHOCKWAVE_FACTOR;
    let seismic_magnitude = (energy_megatons.log10() + SEISMIC_OFFSET).min(SEISMIC_CAP);
    let debris_radius_km = shockwave_radius_km * DEBRIS_SHOCKWAVE_FACTOR;
    let fireball_radius_km = energy_megatons.powf(FIREBALL_EXPONENT) * FIREBALL_FACTOR;
    let atmospheric_dust_gt = PI / 6.0 * diameter.powi(3) * DUST_CRUST_DENSITY * DUST_LOFTED_FRACTION
        / KG_PER_BILLION_TONS;

    let physics = ImpactPhysics {
        mass_kg,
        velocity_m_s,
        kinetic_energy_joules,
        energy_megatons,
        crater_diameter_km,
        temperature_c,
        shockwave_radius_km,
        seismic_magnitude,
        debris_radius_km,
        fireball_radius_km,
        atmospheric_dust_gt,
        casualties: shockwave_radius_km.powi(2) * CASUALTIES_PER_SHOCKWAVE_KM2,
        infrastructure_radius_km: shockwave_radius_km * INFRASTRUCTURE_SHOCKWAVE_FACTOR,
        economic_loss_busd: energy_megatons * ECONOMIC_LOSS_PER_MEGATON,
        displaced_population: debris_radius_km.powi(2) * DISPLACED_PER_DEBRIS_KM2,
    };

    if let Some(key) = MetricKey::ALL
        .into_iter()
        .find(|k| !physics.raw(*k).is_finite())
    {
        return Err(ImpactError::DegenerateResult {
            quantity: key.label(),
            value: physics.raw(key),
        });
    }

    Ok(physics)
}
