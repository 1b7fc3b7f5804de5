//! Host-facing entry points
//!
//! [`DisplayToolkit`] bundles a rendering engine with the display layer's
//! configuration and exposes the operations a host script calls: make
//! mappings, make a display, bind data, draw a line.

use crate::axis::{resolve_target, AxisInferencer, DrawTarget, InferredDomain};
use crate::color::Color;
use crate::config::DisplayConfig;
use crate::engine::{CellRegistry, RenderEngine, SurfaceKind};
use crate::error::{validation, DisplayError, DisplayResult};
use crate::mapping::{self, ConstantMapping, MappingToken, Resolution, RoleMapping};
use crate::reference::{BoundData, DataReference, GeometricPrimitive, ReferenceBinder};
use crate::selector::{self, DisplaySelector};
use crate::types::{DataType, ScalarType};

/// Display construction and data binding against one rendering engine
#[derive(Debug)]
pub struct DisplayToolkit<E> {
    engine: E,
    config: DisplayConfig,
    selector: DisplaySelector,
    inferencer: AxisInferencer,
    binder: ReferenceBinder,
}

impl<E: RenderEngine> DisplayToolkit<E> {
    /// Create a toolkit with the given engine and configuration.
    ///
    /// Fails if the configuration leaves a surface or reference name blank.
    pub fn new(engine: E, config: DisplayConfig) -> DisplayResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(engine, config))
    }

    fn with_valid_config(engine: E, config: DisplayConfig) -> Self {
        let selector = DisplaySelector::new(
            config.three_d_available,
            config.surface_name_3d.clone(),
            config.surface_name_2d.clone(),
        );
        let inferencer = AxisInferencer::new().strict(config.strict_axes);
        let binder = ReferenceBinder::new().rejecting_duplicates(config.reject_duplicate_references);

        Self {
            engine,
            config,
            selector,
            inferencer,
            binder,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Resolve a flat `(type, role name)` list into mappings
    pub fn make_mapping(&self, tokens: &[MappingToken]) -> DisplayResult<Resolution> {
        Ok(mapping::resolve(tokens)?)
    }

    /// Create a display suited to `mappings` (`None` for a full 3D display)
    pub fn make_display(&self, mappings: Option<&[RoleMapping]>) -> DisplayResult<E::Surface> {
        self.selector.select(&self.engine, mappings)
    }

    /// Create a full 3D display (2D when no 3D engine is available)
    pub fn make_display_3d(&self, mappings: Option<&[RoleMapping]>) -> DisplayResult<E::Surface> {
        self.selector
            .create(&self.engine, SurfaceKind::three_d(), mappings)
    }

    /// Create a native 2D display
    pub fn make_display_2d(&self, mappings: Option<&[RoleMapping]>) -> DisplayResult<E::Surface> {
        self.selector
            .create(&self.engine, SurfaceKind::two_d(), mappings)
    }

    /// Apply mappings to an existing display
    pub fn add_mappings(
        &self,
        display: &mut E::Surface,
        mappings: &[RoleMapping],
    ) -> DisplayResult<()> {
        selector::add_mappings(display, mappings)
    }

    /// Build a line over an explicit domain without attaching it
    pub fn make_line(
        &self,
        domain: Vec<ScalarType>,
        points: Vec<Vec<f64>>,
    ) -> DisplayResult<GeometricPrimitive> {
        Ok(GeometricPrimitive::from_points(domain, points)?)
    }

    /// Attach data to a display under `name`
    pub fn bind_reference(
        &self,
        name: &str,
        data: Option<BoundData>,
        display: &mut E::Surface,
        constants: Option<&[ConstantMapping]>,
    ) -> DisplayResult<DataReference> {
        self.binder.bind(name, data, display, constants)
    }

    /// Infer the domain a primitive drawn on `target` would use
    pub fn infer_domain<R>(
        &self,
        target: DrawTarget<'_, E::Surface>,
        registry: &mut R,
        dimensionality: usize,
    ) -> DisplayResult<InferredDomain>
    where
        R: CellRegistry<Surface = E::Surface>,
    {
        self.inferencer.infer(target, registry, dimensionality)
    }

    /// Draw a line of points onto a display.
    ///
    /// `points` is point-major: one inner vector per point. Component-major
    /// input goes through [`crate::reference::transpose`] first.
    ///
    /// With `domain` given, its components are the line's axes in order.
    /// Otherwise the domain is inferred from the target display's axis
    /// mappings. `color` becomes fixed red/green/blue attributes on the
    /// reference.
    pub fn draw_primitive<R>(
        &self,
        target: DrawTarget<'_, E::Surface>,
        registry: &mut R,
        points: Vec<Vec<f64>>,
        color: Option<Color>,
        domain: Option<DataType>,
    ) -> DisplayResult<DataReference>
    where
        R: CellRegistry<Surface = E::Surface>,
    {
        let dimensionality = validation::validate_point_arity(&points)?;
        let display = resolve_target(target, registry)?;

        let domain = match domain {
            Some(domain) => domain.into_components(),
            None => self
                .inferencer
                .infer_for(display.as_deref(), dimensionality)?
                .into_domain()?,
        };
        let primitive = GeometricPrimitive::from_points(domain, points)?;

        let reference_name = self.config.primitive_reference_name.as_str();
        let display = display.ok_or_else(|| DisplayError::NoDisplay {
            reference: reference_name.to_string(),
        })?;

        let constants = color.map(|c| c.to_constant_mappings());
        self.binder.bind(
            reference_name,
            Some(BoundData::Primitive(primitive)),
            display,
            constants.as_deref(),
        )
    }
}

impl<E: RenderEngine + Default> Default for DisplayToolkit<E> {
    fn default() -> Self {
        Self::with_valid_config(E::default(), DisplayConfig::default())
    }
}
