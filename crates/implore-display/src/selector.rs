//! Display surface selection
//!
//! Decides which kind of surface a set of role mappings needs:
//!
//! - No mappings at all: a full 3D surface
//! - Some mapping drives the depth axis: a full 3D surface
//! - Otherwise: a 3D surface flattened to two axes
//!
//! Without a 3D engine every case falls back to a native 2D surface. New
//! surfaces get the mappings applied and a maximized projection.

use crate::engine::{DisplaySurface, RenderEngine, SurfaceKind};
use crate::error::DisplayResult;
use crate::mapping::RoleMapping;

/// Picks and prepares display surfaces
#[derive(Debug, Clone)]
pub struct DisplaySelector {
    three_d_available: bool,
    surface_name_3d: String,
    surface_name_2d: String,
}

impl DisplaySelector {
    pub fn new(
        three_d_available: bool,
        surface_name_3d: impl Into<String>,
        surface_name_2d: impl Into<String>,
    ) -> Self {
        Self {
            three_d_available,
            surface_name_3d: surface_name_3d.into(),
            surface_name_2d: surface_name_2d.into(),
        }
    }

    pub fn three_d_available(&self) -> bool {
        self.three_d_available
    }

    /// Surface kind required for `mappings`.
    ///
    /// `None` means no mapping information was supplied, which is distinct
    /// from an empty slice.
    pub fn choose_kind(&self, mappings: Option<&[RoleMapping]>) -> SurfaceKind {
        let needs_depth = match mappings {
            None => true,
            Some(mappings) => mappings.iter().any(|m| m.role.is_depth()),
        };

        match (self.three_d_available, needs_depth) {
            (true, true) => SurfaceKind::three_d(),
            (true, false) => SurfaceKind::flattened(),
            (false, _) => SurfaceKind::two_d(),
        }
    }

    /// Create a surface suited to `mappings`
    pub fn select<E: RenderEngine>(
        &self,
        engine: &E,
        mappings: Option<&[RoleMapping]>,
    ) -> DisplayResult<E::Surface> {
        let kind = self.choose_kind(mappings);
        tracing::debug!(
            "Selected {} surface (flattened: {}) for {} mappings",
            kind.dimensionality.short_name(),
            kind.flattened,
            mappings.map_or("absent".to_string(), |m| m.len().to_string())
        );
        self.create(engine, kind, mappings)
    }

    /// Create a surface of an explicit kind.
    ///
    /// A 3D request without a 3D engine yields a native 2D surface.
    pub fn create<E: RenderEngine>(
        &self,
        engine: &E,
        requested: SurfaceKind,
        mappings: Option<&[RoleMapping]>,
    ) -> DisplayResult<E::Surface> {
        let kind = if requested.is_three_d() && !self.three_d_available {
            tracing::info!("3D rendering unavailable, using a 2D surface instead");
            SurfaceKind::two_d()
        } else {
            requested
        };

        let name = if kind.is_three_d() {
            &self.surface_name_3d
        } else {
            &self.surface_name_2d
        };

        let mut display = engine.create_surface(name, kind)?;
        if let Some(mappings) = mappings {
            add_mappings(&mut display, mappings)?;
        }
        maximize(&mut display)?;

        Ok(display)
    }
}

/// Apply mappings to a display in order
pub fn add_mappings<S: DisplaySurface>(
    surface: &mut S,
    mappings: &[RoleMapping],
) -> DisplayResult<()> {
    for mapping in mappings {
        tracing::trace!(
            "Mapping {} -> {} on '{}'",
            mapping.data_type,
            mapping.role.display_name(),
            surface.name()
        );
        surface.apply_mapping(mapping.clone())?;
    }
    Ok(())
}

/// Resize the display's content to fill most of its viewport
pub fn maximize<S: DisplaySurface>(surface: &mut S) -> DisplayResult<()> {
    let matrix = surface.projection().maximized();
    tracing::debug!(
        "Maximizing '{}' ({}-entry projection)",
        surface.name(),
        matrix.len()
    );
    surface.set_projection(matrix)?;
    Ok(())
}
