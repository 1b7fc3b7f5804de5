//! Collaborator interfaces
//!
//! The rendering engine, its display surfaces and the named-cell registry
//! live outside this crate. These traits are the narrow seams the display
//! layer calls through; [`crate::memory`] provides headless versions.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::mapping::{ConstantMapping, RoleMapping};
use crate::projection::ProjectionMatrix;
use crate::reference::DataReference;

/// Dimensionality of a display surface. Fixed for the surface's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Dimensionality {
    TwoD,
    ThreeD,
}

impl Dimensionality {
    /// Short name for log output
    pub fn short_name(&self) -> &'static str {
        match self {
            Dimensionality::TwoD => "2D",
            Dimensionality::ThreeD => "3D",
        }
    }
}

/// What kind of surface to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SurfaceKind {
    pub dimensionality: Dimensionality,
    /// A 3D surface restricted to a two-axis renderer
    pub flattened: bool,
}

impl SurfaceKind {
    /// Full 3D surface
    pub fn three_d() -> Self {
        Self {
            dimensionality: Dimensionality::ThreeD,
            flattened: false,
        }
    }

    /// 3D surface rendering in two axes
    pub fn flattened() -> Self {
        Self {
            dimensionality: Dimensionality::ThreeD,
            flattened: true,
        }
    }

    /// Native 2D surface
    pub fn two_d() -> Self {
        Self {
            dimensionality: Dimensionality::TwoD,
            flattened: false,
        }
    }

    pub fn is_three_d(&self) -> bool {
        self.dimensionality == Dimensionality::ThreeD
    }
}

/// A rendering surface owned by the engine
pub trait DisplaySurface {
    /// Name the surface was created under
    fn name(&self) -> &str;

    /// Kind the surface was created as
    fn kind(&self) -> SurfaceKind;

    /// Add a role mapping
    fn apply_mapping(&mut self, mapping: RoleMapping) -> EngineResult<()>;

    /// Currently applied role mappings, in application order
    fn mappings(&self) -> &[RoleMapping];

    /// Current projection matrix
    fn projection(&self) -> ProjectionMatrix;

    /// Replace the projection matrix
    fn set_projection(&mut self, matrix: ProjectionMatrix) -> EngineResult<()>;

    /// Attach a data reference with optional fixed attributes
    fn attach_reference(
        &mut self,
        reference: &DataReference,
        constants: &[ConstantMapping],
    ) -> EngineResult<()>;

    /// Names of the references attached so far
    fn reference_names(&self) -> Vec<String>;
}

/// The rendering engine: a factory for display surfaces
pub trait RenderEngine {
    type Surface: DisplaySurface;

    /// Create a new surface of the requested kind
    fn create_surface(&self, name: &str, kind: SurfaceKind) -> EngineResult<Self::Surface>;
}

/// Registry of displays addressable by cell name
pub trait CellRegistry {
    type Surface: DisplaySurface;

    /// Resolve a cell name to its display
    fn display_by_name(&mut self, name: &str) -> Option<&mut Self::Surface>;
}
