//! implore-display - Display selection and role mapping for scientific data
//!
//! This crate turns abstract data types and symbolic rendering roles
//! ("x", "lat", "hue", "flow1x", ...) into a concrete display
//! configuration. Drawing is left to an external rendering engine reached
//! through the traits in [`engine`].
//!
//! # Key Components
//!
//! - **ScalarRole**: Closed table of rendering roles, ordered as the engine's role array
//! - **Mapping**: Resolves `(type, role name)` pairs, reporting unknown names without failing
//! - **DisplaySelector**: Chooses a 3D, flattened 3D, or native 2D surface and maximizes it
//! - **AxisInferencer**: Finds the x/y/z types a drawn line should use on an existing display
//! - **ReferenceBinder**: Attaches data and primitives to displays under named references
//! - **DisplayToolkit**: Host-facing entry points tying the above to one engine
//!
//! # Surface Selection
//!
//! - No mappings supplied: full 3D surface
//! - A mapping to the z axis: full 3D surface
//! - Anything else: 3D surface flattened to a two-axis renderer
//!
//! When the configuration says no 3D engine is available, every case gets
//! a native 2D surface.

pub mod axis;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod memory;
pub mod projection;
pub mod reference;
pub mod role;
pub mod selector;
pub mod toolkit;
pub mod types;

pub use axis::{AxisInferencer, DrawTarget, InferredDomain};
pub use color::Color;
pub use config::{ConfigError, DisplayConfig};
pub use engine::{CellRegistry, Dimensionality, DisplaySurface, RenderEngine, SurfaceKind};
pub use error::{AxisError, ConfigurationError, DisplayError, DisplayResult, EngineError};
pub use mapping::{ConstantMapping, MappingToken, Resolution, RoleMapping, UnresolvedRole};
pub use memory::{MemoryCellRegistry, MemoryEngine, MemorySurface};
pub use projection::ProjectionMatrix;
pub use reference::{BoundData, DataReference, GeometricPrimitive, ReferenceBinder};
pub use role::{Axis, ScalarRole};
pub use selector::DisplaySelector;
pub use toolkit::DisplayToolkit;
pub use types::{DataType, ScalarType, TypeRegistry};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
