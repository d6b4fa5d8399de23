//! Enumeration types used throughout the calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ImpactError;

/// Bulk material of the impactor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    /// Carbonaceous / rubble-pile rock.
    #[default]
    Rocky,
    /// Metallic nickel-iron.
    Iron,
    /// Ordinary chondrite.
    Stony,
    /// Cometary ice.
    Icy,
}

impl Composition {
    pub const ALL: [Composition; 4] = [
        Composition::Rocky,
        Composition::Iron,
        Composition::Stony,
        Composition::Icy,
    ];

    /// Bulk density in kg/m³.
    pub fn density(self) -> f64 {
        match self {
            Composition::Rocky => ROCKY_DENSITY,
            Composition::Iron => IRON_DENSITY,
            Composition::Stony => STONY_DENSITY,
            Composition::Icy => ICY_DENSITY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Composition::Rocky => "rocky",
            Composition::Iron => "iron",
            Composition::Stony => "stony",
            Composition::Icy => "icy",
        }
    }
}

impl FromStr for Composition {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Composition::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ImpactError::UnknownComposition(s.to_string()))
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Four-tier severity label. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Minor,
    Moderate,
    Severe,
    Catastrophic,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Catastrophic => "catastrophic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Report section a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricGroup {
    Immediate,
    Environmental,
    HumanImpact,
}

impl MetricGroup {
    pub const ALL: [MetricGroup; 3] = [
        MetricGroup::Immediate,
        MetricGroup::Environmental,
        MetricGroup::HumanImpact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MetricGroup::Immediate => "Immediate Effects",
            MetricGroup::Environmental => "Environmental Effects",
            MetricGroup::HumanImpact => "Human Impact",
        }
    }
}

/// Every metric the calculator reports. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    // --- Immediate ---
    CraterDiameter,
    Energy,
    Temperature,
    FireballRadius,
    // --- Environmental ---
    ShockwaveRadius,
    DebrisFieldRadius,
    SeismicMagnitude,
    AtmosphericDust,
    // --- Human impact ---
    CasualtiesImmediate,
    InfrastructureDamage,
    EconomicLoss,
    RefugeePopulation,
}

impl MetricKey {
    pub const ALL: [MetricKey; 12] = [
        MetricKey::CraterDiameter,
        MetricKey::Energy,
        MetricKey::Temperature,
        MetricKey::FireballRadius,
        MetricKey::ShockwaveRadius,
        MetricKey::DebrisFieldRadius,
        MetricKey::SeismicMagnitude,
        MetricKey::AtmosphericDust,
        MetricKey::CasualtiesImmediate,
        MetricKey::InfrastructureDamage,
        MetricKey::EconomicLoss,
        MetricKey::RefugeePopulation,
    ];

    pub fn group(self) -> MetricGroup {
        match self {
            MetricKey::CraterDiameter
            | MetricKey::Energy
            | MetricKey::Temperature
            | MetricKey::FireballRadius => MetricGroup::Immediate,
            MetricKey::ShockwaveRadius
            | MetricKey::DebrisFieldRadius
            | MetricKey::SeismicMagnitude
            | MetricKey::AtmosphericDust => MetricGroup::Environmental,
            MetricKey::CasualtiesImmediate
            | MetricKey::InfrastructureDamage
            | MetricKey::EconomicLoss
            | MetricKey::RefugeePopulation => MetricGroup::HumanImpact,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MetricKey::CraterDiameter => "Crater Diameter",
            MetricKey::Energy => "Impact Energy",
            MetricKey::Temperature => "Peak Temperature",
            MetricKey::FireballRadius => "Fireball Radius",
            MetricKey::ShockwaveRadius => "Shockwave Radius",
            MetricKey::DebrisFieldRadius => "Debris Field Radius",
            MetricKey::SeismicMagnitude => "Seismic Magnitude",
            MetricKey::AtmosphericDust => "Atmospheric Dust",
            MetricKey::CasualtiesImmediate => "Immediate Casualties",
            MetricKey::InfrastructureDamage => "Infrastructure Damage",
            MetricKey::EconomicLoss => "Economic Loss",
            MetricKey::RefugeePopulation => "Displaced Population",
        }
    }
}
