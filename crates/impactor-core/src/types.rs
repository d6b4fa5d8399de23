//! Input parameter types.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Composition;
use crate::error::ImpactError;

/// Named point on the Earth's surface. Carried through for labeling only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    /// Degrees north, [-90, 90].
    pub latitude: f64,
    /// Degrees east, [-180, 180].
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn validate(&self) -> Result<(), ImpactError> {
        check_in_range("latitude", self.latitude, LATITUDE_RANGE)?;
        check_in_range("longitude", self.longitude, LONGITUDE_RANGE)
    }
}

/// Physical description of one simulated impact.
///
/// Density is already resolved from the composition; the calculator only
/// sees numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactParameters {
    /// Impactor diameter (meters).
    pub diameter_meters: f64,
    /// Impact velocity (km/s).
    pub speed_km_per_sec: f64,
    /// Impact angle from horizontal (degrees). Reserved, not used by the formulas.
    pub angle_degrees: f64,
    /// Bulk density (kg/m³).
    pub density: f64,
    pub location: GeoLocation,
}

impl ImpactParameters {
    pub fn new(
        diameter_meters: f64,
        speed_km_per_sec: f64,
        angle_degrees: f64,
        density: f64,
        location: GeoLocation,
    ) -> Self {
        Self {
            diameter_meters,
            speed_km_per_sec,
            angle_degrees,
            density,
            location,
        }
    }

    /// Build parameters from a composition name, resolving its density.
    pub fn from_composition(
        diameter_meters: f64,
        speed_km_per_sec: f64,
        angle_degrees: f64,
        composition: &str,
        location: GeoLocation,
    ) -> Result<Self, ImpactError> {
        let composition: Composition = composition.parse()?;
        Ok(Self::new(
            diameter_meters,
            speed_km_per_sec,
            angle_degrees,
            composition.density(),
            location,
        ))
    }

    /// Reject input the formulas are not defined for.
    pub fn validate(&self) -> Result<(), ImpactError> {
        check_positive("diameterMeters", self.diameter_meters)?;
        check_positive("speedKmPerSec", self.speed_km_per_sec)?;
        check_positive("density", self.density)?;
        check_positive("angleDegrees", self.angle_degrees)?;
        if self.angle_degrees > MAX_ANGLE_DEG {
            return Err(ImpactError::OutOfRange {
                field: "angleDegrees",
                value: self.angle_degrees,
                min: 0.0,
                max: MAX_ANGLE_DEG,
            });
        }
        self.location.validate()
    }

    /// Check the inputs against the ranges offered to users.
    ///
    /// Stricter than [`validate`](Self::validate); the calculator accepts any
    /// positive input, this is for collaborators taking free-form input.
    pub fn check_ranges(&self) -> Result<(), ImpactError> {
        self.validate()?;
        check_in_range("diameterMeters", self.diameter_meters, DIAMETER_RANGE_M)?;
        check_in_range("speedKmPerSec", self.speed_km_per_sec, SPEED_RANGE_KM_S)?;
        check_in_range("angleDegrees", self.angle_degrees, ANGLE_RANGE_DEG)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ImpactError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ImpactError::NonFinite { field, value })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ImpactError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ImpactError::NonPositive { field, value })
    }
}

fn check_in_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ImpactError> {
    check_finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ImpactError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
