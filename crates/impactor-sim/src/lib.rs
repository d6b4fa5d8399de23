//! Impact effects calculator.
//!
//! Maps asteroid parameters to a categorized report of derived physical and
//! human-impact metrics using closed-form approximations. Stateless: every
//! call is independent and safe to run from any thread.
//!
//! Also hosts the input catalogs (preset scenarios and named locations)
//! collaborators pick parameters from.

pub mod constants;
pub mod effects;
pub mod format;
pub mod locations;
pub mod physics;
pub mod profiles;
pub mod scenario;
pub mod timeline;

pub use effects::compute_impact_effects;
pub use impactor_core as core;
pub use physics::{compute_physics, ImpactPhysics};

#[cfg(test)]
mod tests;
