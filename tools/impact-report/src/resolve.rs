//! Turns command-line choices into calculator input.

use impactor_core::enums::Composition;
use impactor_core::types::ImpactParameters;
use impactor_sim::locations::find_location;
use impactor_sim::scenario::{get_scenario, ScenarioId};

use crate::cli::RunArgs;
use crate::error::AppError;

const DEFAULT_ANGLE_DEG: f64 = 45.0;
const DEFAULT_LOCATION: &str = "New York City";

/// Parameters ready for the calculator plus a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRun {
    pub name: String,
    pub composition: Composition,
    pub parameters: ImpactParameters,
}

/// Resolve a preset and/or custom values, composition included, and check
/// them against the ranges offered to users.
pub fn resolve_run(args: &RunArgs) -> Result<ResolvedRun, AppError> {
    let preset = args
        .preset
        .as_deref()
        .map(|p| p.parse::<ScenarioId>().map(get_scenario))
        .transpose()?;

    let composition = match (&args.composition, &preset) {
        (Some(name), _) => name.parse::<Composition>()?,
        (None, Some(s)) => s.composition,
        (None, None) => Composition::default(),
    };
    let location = match (&args.location, &preset) {
        (Some(name), _) => find_location(name)?,
        (None, Some(s)) => s.location.clone(),
        (None, None) => find_location(DEFAULT_LOCATION)?,
    };
    let diameter = args
        .diameter
        .or(preset.as_ref().map(|s| s.diameter_meters))
        .ok_or(AppError::MissingArgument("diameter"))?;
    let speed = args
        .speed
        .or(preset.as_ref().map(|s| s.speed_km_per_sec))
        .ok_or(AppError::MissingArgument("speed"))?;
    let angle = args
        .angle
        .or(preset.as_ref().map(|s| s.angle_degrees))
        .unwrap_or(DEFAULT_ANGLE_DEG);

    let parameters = ImpactParameters::new(diameter, speed, angle, composition.density(), location);
    parameters.check_ranges()?;

    let name = match (&args.name, &preset) {
        (Some(name), _) => name.clone(),
        (None, Some(s)) => s.name.to_string(),
        (None, None) => format!("Custom {diameter} m {composition} impact"),
    };

    Ok(ResolvedRun {
        name,
        composition,
        parameters,
    })
}
