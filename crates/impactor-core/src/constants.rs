//! Physical constants, lookup tables and input bounds.

// --- Composition densities (kg/m³) ---

pub const ROCKY_DENSITY: f64 = 2600.0;
pub const IRON_DENSITY: f64 = 7800.0;
pub const STONY_DENSITY: f64 = 3500.0;
pub const ICY_DENSITY: f64 = 1000.0;

// --- Unit conversions ---

/// Joules in one megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Meters per kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

// --- Slider ranges offered to users ---

/// Impactor diameter bounds (meters).
pub const DIAMETER_RANGE_M: (f64, f64) = (10.0, 2000.0);

/// Impact speed bounds (km/s).
pub const SPEED_RANGE_KM_S: (f64, f64) = (5.0, 50.0);

/// Impact angle bounds (degrees from horizontal).
pub const ANGLE_RANGE_DEG: (f64, f64) = (15.0, 90.0);

// --- Geographic bounds ---

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Steepest accepted impact angle. Angles must lie in (0, MAX_ANGLE_DEG].
pub const MAX_ANGLE_DEG: f64 = 90.0;
