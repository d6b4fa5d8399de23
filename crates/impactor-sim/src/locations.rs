//! Named impact sites offered for selection.

use impactor_core::types::GeoLocation;
use impactor_core::ImpactError;

/// (name, latitude, longitude).
pub const LOCATIONS: [(&str, f64, f64); 10] = [
    ("New York City", 40.7128, -74.0060),
    ("London", 51.5074, -0.1278),
    ("Tokyo", 35.6762, 139.6503),
    ("Paris", 48.8566, 2.3522),
    ("Sydney", -33.8688, 151.2093),
    ("Mumbai", 19.0760, 72.8777),
    ("Pacific Ocean", 0.0, -160.0),
    ("Sahara Desert", 23.4162, 25.6628),
    ("Siberia", 60.8858, 101.8939),
    ("Yucatan Peninsula", 21.3000, -89.5000),
];

/// Every catalog location, in catalog order.
pub fn locations() -> Vec<GeoLocation> {
    LOCATIONS
        .iter()
        .map(|(name, lat, lon)| GeoLocation::new(*name, *lat, *lon))
        .collect()
}

/// Look up a catalog location by name, ignoring case.
pub fn find_location(name: &str) -> Result<GeoLocation, ImpactError> {
    let wanted = name.trim();
    LOCATIONS
        .iter()
        .find(|(n, _, _)| n.eq_ignore_ascii_case(wanted))
        .map(|(n, lat, lon)| GeoLocation::new(*n, *lat, *lon))
        .ok_or_else(|| ImpactError::UnknownLocation(name.to_string()))
}
