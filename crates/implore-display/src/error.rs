//! Error types for implore-display
//!
//! Provides error handling for:
//! - Malformed caller input (pair lists, point arrays, domain tuples)
//! - Failures reported by the rendering engine
//! - Axis inference against displays that lack a needed axis
//!
//! Unknown role names are not errors. They are collected in
//! [`crate::mapping::Resolution`] and the rest of the batch proceeds.

use thiserror::Error;

use crate::config::ConfigError;
use crate::role::Axis;

/// Main error type for display operations
#[derive(Error, Debug)]
pub enum DisplayError {
    /// Structural problem with the caller's input
    #[error("Invalid input: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Display layer configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The rendering engine rejected an operation
    #[error("Rendering engine error: {0}")]
    Engine(#[from] EngineError),

    /// Axis inference could not bind a required axis
    #[error("Axis inference failed: {0}")]
    Axis(#[from] AxisError),

    /// Named display not known to the cell registry
    #[error("No display registered under '{name}'")]
    DisplayNotFound { name: String },

    /// A primitive was drawn without any display to attach it to
    #[error("No display to attach '{reference}' to")]
    NoDisplay { reference: String },

    /// Reference name already used on the target display
    #[error("Display '{display}' already has a reference named '{name}'")]
    DuplicateReference { display: String, name: String },
}

/// Malformed input shape. Fatal to the single call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Type/role tokens must come in pairs
    #[error("Mapping arguments must come in (type, role) pairs, got {len} items")]
    OddPairCount { len: usize },

    /// A role name sat where a data type was expected, or the reverse
    #[error("Mapping argument {position} should be a {expected}")]
    MisplacedToken {
        position: usize,
        expected: &'static str,
    },

    /// A primitive needs at least one point
    #[error("Primitive has no points")]
    EmptyPrimitive,

    /// Points must have 2 or 3 components
    #[error("Unsupported point dimensionality: {found} (expected 2 or 3)")]
    UnsupportedDimensionality { found: usize },

    /// A point's arity disagrees with the rest of the primitive
    #[error("Point {index} has {found} components, expected {expected}")]
    PointArity {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Explicit domain type has the wrong number of components
    #[error("Domain type has {found} components but points have {expected}")]
    DomainArity { expected: usize, found: usize },
}

/// Errors reported by the external rendering engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Surface could not be created
    #[error("Surface creation failed: {message}")]
    SurfaceCreation { message: String },

    /// Role mapping rejected by the surface
    #[error("Mapping to {role} rejected: {message}")]
    MappingRejected { role: String, message: String },

    /// Projection matrix rejected
    #[error("Projection update failed: {message}")]
    Projection { message: String },

    /// Reference could not be attached
    #[error("Attaching reference '{name}' failed: {message}")]
    Reference { name: String, message: String },
}

/// Axis inference failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxisError {
    /// The display maps some axes but not this one
    #[error("Display maps no data to the {axis} axis")]
    Missing { axis: Axis },
}

/// Result type alias for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type alias for input validation
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Validation utilities
pub mod validation {
    use super::*;

    /// Validate that a flat argument list pairs up
    pub fn validate_pair_count(len: usize) -> ConfigurationResult<()> {
        if len % 2 != 0 {
            return Err(ConfigurationError::OddPairCount { len });
        }
        Ok(())
    }

    /// Validate a point dimensionality
    pub fn validate_dimensionality(found: usize) -> ConfigurationResult<()> {
        if !(2..=3).contains(&found) {
            return Err(ConfigurationError::UnsupportedDimensionality { found });
        }
        Ok(())
    }

    /// Validate that every point has the same arity as the first
    pub fn validate_point_arity<P: AsRef<[f64]>>(points: &[P]) -> ConfigurationResult<usize> {
        let first = points.first().ok_or(ConfigurationError::EmptyPrimitive)?;
        let expected = first.as_ref().len();
        validate_dimensionality(expected)?;

        for (index, point) in points.iter().enumerate() {
            let found = point.as_ref().len();
            if found != expected {
                return Err(ConfigurationError::PointArity {
                    index,
                    expected,
                    found,
                });
            }
        }
        Ok(expected)
    }

    /// Validate that a domain tuple matches the point dimensionality
    pub fn validate_domain_arity(expected: usize, found: usize) -> ConfigurationResult<()> {
        if expected != found {
            return Err(ConfigurationError::DomainArity { expected, found });
        }
        Ok(())
    }
}
