//! Error types for parameter resolution and effect calculation.

/// Errors raised before or during an impact calculation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImpactError {
    /// A numeric input was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A strictly positive input was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// An input fell outside its accepted range.
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Composition name not present in the density table.
    #[error("unknown composition '{0}' (expected rocky, iron, stony or icy)")]
    UnknownComposition(String),

    /// Unknown preset scenario name.
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    /// Unknown catalog location name.
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// Valid input whose derived quantity underflowed or overflowed.
    #[error("{quantity} is not representable for this input ({value})")]
    DegenerateResult { quantity: &'static str, value: f64 },
}
