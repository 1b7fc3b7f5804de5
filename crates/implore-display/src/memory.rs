//! Headless collaborators
//!
//! In-memory engine, surface and cell registry. They record what the
//! display layer asks of them and draw nothing, which makes them useful for
//! tests and for hosts that only need the resolved configuration.

use std::collections::HashMap;

use crate::engine::{CellRegistry, DisplaySurface, RenderEngine, SurfaceKind};
use crate::error::{EngineError, EngineResult};
use crate::mapping::{ConstantMapping, RoleMapping};
use crate::projection::ProjectionMatrix;
use crate::reference::DataReference;

/// A reference attached to a [`MemorySurface`]
#[derive(Debug, Clone)]
pub struct AttachedReference {
    pub reference: DataReference,
    pub constants: Vec<ConstantMapping>,
}

/// A display surface that keeps its state in memory
#[derive(Debug, Clone)]
pub struct MemorySurface {
    name: String,
    kind: SurfaceKind,
    mappings: Vec<RoleMapping>,
    projection: ProjectionMatrix,
    references: Vec<AttachedReference>,
}

impl MemorySurface {
    /// Create a surface with the default projection for its kind
    pub fn new(name: impl Into<String>, kind: SurfaceKind) -> Self {
        let projection = if kind.is_three_d() {
            ProjectionMatrix::identity_3d()
        } else {
            ProjectionMatrix::identity_2d()
        };

        Self {
            name: name.into(),
            kind,
            mappings: Vec::new(),
            projection,
            references: Vec::new(),
        }
    }

    /// References in attachment order
    pub fn references(&self) -> &[AttachedReference] {
        &self.references
    }

    /// Look up an attached reference by name (first match)
    pub fn reference(&self, name: &str) -> Option<&AttachedReference> {
        self.references
            .iter()
            .find(|attached| attached.reference.name() == name)
    }
}

impl DisplaySurface for MemorySurface {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SurfaceKind {
        self.kind
    }

    fn apply_mapping(&mut self, mapping: RoleMapping) -> EngineResult<()> {
        self.mappings.push(mapping);
        Ok(())
    }

    fn mappings(&self) -> &[RoleMapping] {
        &self.mappings
    }

    fn projection(&self) -> ProjectionMatrix {
        self.projection.clone()
    }

    fn set_projection(&mut self, matrix: ProjectionMatrix) -> EngineResult<()> {
        if matrix.len() != self.projection.len() {
            return Err(EngineError::Projection {
                message: format!(
                    "expected {} entries, got {}",
                    self.projection.len(),
                    matrix.len()
                ),
            });
        }
        self.projection = matrix;
        Ok(())
    }

    fn attach_reference(
        &mut self,
        reference: &DataReference,
        constants: &[ConstantMapping],
    ) -> EngineResult<()> {
        self.references.push(AttachedReference {
            reference: reference.clone(),
            constants: constants.to_vec(),
        });
        Ok(())
    }

    fn reference_names(&self) -> Vec<String> {
        self.references
            .iter()
            .map(|attached| attached.reference.name().to_string())
            .collect()
    }
}

/// Engine that creates [`MemorySurface`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryEngine;

impl MemoryEngine {
    pub fn new() -> Self {
        Self
    }
}

impl RenderEngine for MemoryEngine {
    type Surface = MemorySurface;

    fn create_surface(&self, name: &str, kind: SurfaceKind) -> EngineResult<MemorySurface> {
        Ok(MemorySurface::new(name, kind))
    }
}

/// Named cells holding [`MemorySurface`]s
#[derive(Debug, Default)]
pub struct MemoryCellRegistry {
    cells: HashMap<String, MemorySurface>,
}

impl MemoryCellRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display under a cell name, returning any display it replaces
    pub fn insert(&mut self, name: impl Into<String>, display: MemorySurface) -> Option<MemorySurface> {
        self.cells.insert(name.into(), display)
    }

    pub fn get(&self, name: &str) -> Option<&MemorySurface> {
        self.cells.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<MemorySurface> {
        self.cells.remove(name)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellRegistry for MemoryCellRegistry {
    type Surface = MemorySurface;

    fn display_by_name(&mut self, name: &str) -> Option<&mut MemorySurface> {
        self.cells.get_mut(name)
    }
}
