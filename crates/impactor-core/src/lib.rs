//! Core types and definitions for the impact effects calculator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! input parameters, report records, enums, constants and errors.
//! It performs no computation beyond input validation.

pub mod constants;
pub mod enums;
pub mod error;
pub mod report;
pub mod types;

pub use error::ImpactError;
