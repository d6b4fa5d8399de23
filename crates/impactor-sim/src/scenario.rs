//! Scenario definitions: hardcoded preset impacts.
//!
//! Each preset names a diameter, speed, angle, composition and site within
//! the ranges offered to users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use impactor_core::enums::Composition;
use impactor_core::types::{GeoLocation, ImpactParameters};
use impactor_core::ImpactError;

use crate::locations::LOCATIONS;

/// Preset scenario identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    ChelyabinskAirburst,
    TunguskaEvent,
    CityKiller,
    RegionalDevastation,
    ContinentalCrisis,
    ExtinctionLevel,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 6] = [
        ScenarioId::ChelyabinskAirburst,
        ScenarioId::TunguskaEvent,
        ScenarioId::CityKiller,
        ScenarioId::RegionalDevastation,
        ScenarioId::ContinentalCrisis,
        ScenarioId::ExtinctionLevel,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ScenarioId::ChelyabinskAirburst => "chelyabinsk-airburst",
            ScenarioId::TunguskaEvent => "tunguska-event",
            ScenarioId::CityKiller => "city-killer",
            ScenarioId::RegionalDevastation => "regional-devastation",
            ScenarioId::ContinentalCrisis => "continental-crisis",
            ScenarioId::ExtinctionLevel => "extinction-level",
        }
    }
}

impl FromStr for ScenarioId {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace([' ', '_'], "-");
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.slug().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ImpactError::UnknownScenario(s.to_string()))
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A fully specified preset impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: &'static str,
    pub description: &'static str,
    pub diameter_meters: f64,
    pub speed_km_per_sec: f64,
    pub angle_degrees: f64,
    pub composition: Composition,
    pub location: GeoLocation,
}

impl Scenario {
    /// Calculator input with the composition resolved to a density.
    pub fn parameters(&self) -> ImpactParameters {
        ImpactParameters::new(
            self.diameter_meters,
            self.speed_km_per_sec,
            self.angle_degrees,
            self.composition.density(),
            self.location.clone(),
        )
    }
}

/// Build the preset for a given scenario.
pub fn get_scenario(id: ScenarioId) -> Scenario {
    match id {
        // 2013 airburst over the southern Urals.
        ScenarioId::ChelyabinskAirburst => Scenario {
            id,
            name: "Chelyabinsk Airburst",
            description: "A house-sized stony meteor explodes in a shallow entry over a city.",
            diameter_meters: 20.0,
            speed_km_per_sec: 19.0,
            angle_degrees: 18.0,
            composition: Composition::Stony,
            location: GeoLocation::new("Chelyabinsk", 55.1644, 61.4368),
        },
        // 1908 flattening of the Siberian taiga.
        ScenarioId::TunguskaEvent => Scenario {
            id,
            name: "Tunguska Event",
            description: "A fragile icy body flattens two thousand square kilometres of forest.",
            diameter_meters: 60.0,
            speed_km_per_sec: 27.0,
            angle_degrees: 35.0,
            composition: Composition::Icy,
            location: catalog("Siberia"),
        },
        ScenarioId::CityKiller => Scenario {
            id,
            name: "City Killer",
            description: "A 140 m rocky asteroid, the size threshold for planetary defense tracking, hits a megacity.",
            diameter_meters: 140.0,
            speed_km_per_sec: 17.0,
            angle_degrees: 45.0,
            composition: Composition::Rocky,
            location: catalog("New York City"),
        },
        ScenarioId::RegionalDevastation => Scenario {
            id,
            name: "Regional Devastation",
            description: "A dense iron asteroid wipes out a metropolitan region.",
            diameter_meters: 400.0,
            speed_km_per_sec: 18.0,
            angle_degrees: 60.0,
            composition: Composition::Iron,
            location: catalog("London"),
        },
        ScenarioId::ContinentalCrisis => Scenario {
            id,
            name: "Continental Crisis",
            description: "A kilometre-wide rocky asteroid devastates an entire continent.",
            diameter_meters: 1000.0,
            speed_km_per_sec: 20.0,
            angle_degrees: 45.0,
            composition: Composition::Rocky,
            location: catalog("Paris"),
        },
        ScenarioId::ExtinctionLevel => Scenario {
            id,
            name: "Extinction Level",
            description: "The largest selectable impactor strikes at extreme speed, ending civilisation.",
            diameter_meters: 2000.0,
            speed_km_per_sec: 30.0,
            angle_degrees: 60.0,
            composition: Composition::Iron,
            location: catalog("Yucatan Peninsula"),
        },
    }
}

/// All presets in catalog order.
pub fn scenarios() -> Vec<Scenario> {
    ScenarioId::ALL.into_iter().map(get_scenario).collect()
}

/// Catalog entry by exact name. Only called with names from `LOCATIONS`.
fn catalog(name: &str) -> GeoLocation {
    LOCATIONS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(n, lat, lon)| GeoLocation::new(*n, *lat, *lon))
        .unwrap_or_else(|| GeoLocation::new(name, 0.0, 0.0))
}
