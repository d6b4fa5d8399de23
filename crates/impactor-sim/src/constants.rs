//! Formula coefficients, severity thresholds and display scales.
//!
//! Coefficients are presentation heuristics, not calibrated physics.

// --- Formula coefficients ---

/// Crater scaling: `(MT / 1000)^0.25 * diameter * 0.1`.
pub const CRATER_ENERGY_DIVISOR: f64 = 1000.0;
pub const CRATER_EXPONENT: f64 = 0.25;
pub const CRATER_DIAMETER_FACTOR: f64 = 0.1;

/// Peak temperature: `velocity * 0.5 + sqrt(diameter) * 1000`, capped.
pub const TEMPERATURE_VELOCITY_FACTOR: f64 = 0.5;
pub const TEMPERATURE_DIAMETER_FACTOR: f64 = 1000.0;
pub const TEMPERATURE_CAP_C: f64 = 50_000.0;

/// Shockwave radius: `MT^0.33 * 10`.
pub const SHOCKWAVE_EXPONENT: f64 = 0.33;
pub const SHOCKWAVE_FACTOR: f64 = 10.0;

/// Seismic magnitude: `log10(MT) + 2`, capped.
pub const SEISMIC_OFFSET: f64 = 2.0;
pub const SEISMIC_CAP: f64 = 10.0;

/// Debris radius as a multiple of the shockwave radius.
pub const DEBRIS_SHOCKWAVE_FACTOR: f64 = 3.0;

/// Fireball radius: `MT^0.4 * 0.5`.
pub const FIREBALL_EXPONENT: f64 = 0.4;
pub const FIREBALL_FACTOR: f64 = 0.5;

/// Ejecta dust: sphere-equivalent excavated volume at crustal density,
/// a tenth of which is lofted.
pub const DUST_CRUST_DENSITY: f64 = 2600.0;
pub const DUST_LOFTED_FRACTION: f64 = 0.1;
pub const KG_PER_BILLION_TONS: f64 = 1.0e9;

// --- Human impact multipliers ---

pub const CASUALTIES_PER_SHOCKWAVE_KM2: f64 = 100.0;
pub const INFRASTRUCTURE_SHOCKWAVE_FACTOR: f64 = 2.0;
pub const ECONOMIC_LOSS_PER_MEGATON: f64 = 10.0;
pub const DISPLACED_PER_DEBRIS_KM2: f64 = 50.0;

// --- Severity thresholds: [moderate, severe, catastrophic], strict `>` ---

pub const CRATER_THRESHOLDS_KM: [f64; 3] = [1.0, 5.0, 10.0];
pub const ENERGY_THRESHOLDS_MT: [f64; 3] = [1000.0, 10_000.0, 50_000.0];
pub const TEMPERATURE_THRESHOLDS_C: [f64; 3] = [1000.0, 3000.0, 8000.0];
pub const FIREBALL_THRESHOLDS_KM: [f64; 3] = [10.0, 50.0, 100.0];
pub const SHOCKWAVE_THRESHOLDS_KM: [f64; 3] = [100.0, 500.0, 1000.0];
pub const DEBRIS_THRESHOLDS_KM: [f64; 3] = [300.0, 1500.0, 3000.0];
pub const SEISMIC_THRESHOLDS: [f64; 3] = [4.0, 6.0, 7.0];
pub const DUST_THRESHOLDS_GT: [f64; 3] = [1.0, 10.0, 50.0];
pub const CASUALTY_THRESHOLDS: [f64; 3] = [100_000.0, 1_000_000.0, 5_000_000.0];
pub const INFRASTRUCTURE_THRESHOLDS_KM: [f64; 3] = [100.0, 500.0, 1000.0];
pub const ECONOMIC_THRESHOLDS_BUSD: [f64; 3] = [100.0, 1000.0, 5000.0];
pub const DISPLACED_THRESHOLDS: [f64; 3] = [1_000_000.0, 5_000_000.0, 20_000_000.0];

// --- Progress bar ceilings (raw value that fills the bar) ---

pub const CRATER_SCALE_KM: f64 = 20.0;
pub const ENERGY_SCALE_MT: f64 = 100_000.0;
pub const TEMPERATURE_SCALE_C: f64 = 50_000.0;
pub const FIREBALL_SCALE_KM: f64 = 200.0;
pub const SHOCKWAVE_SCALE_KM: f64 = 3000.0;
pub const DEBRIS_SCALE_KM: f64 = 8000.0;
pub const SEISMIC_SCALE: f64 = 10.0;
pub const DUST_SCALE_GT: f64 = 100.0;
pub const CASUALTY_SCALE: f64 = 10_000_000.0;
pub const INFRASTRUCTURE_SCALE_KM: f64 = 2000.0;
pub const ECONOMIC_SCALE_BUSD: f64 = 10_000.0;
pub const DISPLACED_SCALE: f64 = 50_000_000.0;
