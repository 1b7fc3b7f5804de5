//! Domain inference for primitives drawn without an explicit type
//!
//! A line drawn onto an existing display should land on the axes that
//! display already uses. The inferencer reads the display's x/y/z role
//! mappings and takes their data types as the line's domain. A display with
//! no mappings gets the shared generic types "x", "y" and "z" instead.

use crate::engine::{CellRegistry, DisplaySurface};
use crate::error::{AxisError, DisplayError, DisplayResult};
use crate::mapping::RoleMapping;
use crate::role::Axis;
use crate::types::ScalarType;

/// Where a primitive should be drawn
#[derive(Debug)]
pub enum DrawTarget<'a, S> {
    /// A display looked up through the cell registry
    Named(&'a str),
    /// A display the caller already holds
    Existing(&'a mut S),
    /// No display
    None,
}

/// Resolve a draw target to a display.
///
/// `Named` targets the registry does not know fail with
/// [`DisplayError::DisplayNotFound`]; `None` resolves to no display.
pub fn resolve_target<'a, R: CellRegistry>(
    target: DrawTarget<'a, R::Surface>,
    registry: &'a mut R,
) -> DisplayResult<Option<&'a mut R::Surface>> {
    match target {
        DrawTarget::Named(name) => registry
            .display_by_name(name)
            .map(Some)
            .ok_or_else(|| DisplayError::DisplayNotFound {
                name: name.to_string(),
            }),
        DrawTarget::Existing(display) => Ok(Some(display)),
        DrawTarget::None => Ok(None),
    }
}

/// Axis types found (or synthesized) for a primitive's domain
#[derive(Debug, Clone, PartialEq)]
pub struct InferredDomain {
    pub x: Option<ScalarType>,
    pub y: Option<ScalarType>,
    pub z: Option<ScalarType>,
    /// Components per point, 2 or 3
    pub dimensionality: usize,
}

impl InferredDomain {
    /// Type bound to an axis
    pub fn get(&self, axis: Axis) -> Option<&ScalarType> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::Y => self.y.as_ref(),
            Axis::Z => self.z.as_ref(),
        }
    }

    /// Axes the dimensionality needs, in domain order
    pub fn required_axes(&self) -> &'static [Axis] {
        if self.dimensionality == 2 {
            &[Axis::X, Axis::Y]
        } else {
            &[Axis::X, Axis::Y, Axis::Z]
        }
    }

    /// First required axis left unresolved
    pub fn first_missing(&self) -> Option<Axis> {
        self.required_axes()
            .iter()
            .copied()
            .find(|axis| self.get(*axis).is_none())
    }

    /// The domain tuple, failing on any unresolved required axis
    pub fn into_domain(self) -> Result<Vec<ScalarType>, AxisError> {
        if let Some(axis) = self.first_missing() {
            return Err(AxisError::Missing { axis });
        }
        let dimensionality = self.dimensionality;
        Ok([self.x, self.y, self.z]
            .into_iter()
            .take(dimensionality)
            .flatten()
            .collect())
    }
}

/// Discovers axis types for primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisInferencer {
    strict: bool,
}

impl AxisInferencer {
    /// Inferencer that leaves missing axes unresolved
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail inference when a required axis is missing from the display
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Infer the domain for a draw target
    pub fn infer<R: CellRegistry>(
        &self,
        target: DrawTarget<'_, R::Surface>,
        registry: &mut R,
        dimensionality: usize,
    ) -> DisplayResult<InferredDomain> {
        let display = resolve_target(target, registry)?;
        self.infer_for(display.as_deref(), dimensionality)
    }

    /// Infer the domain from an optional display's current mappings
    pub fn infer_for<S: DisplaySurface>(
        &self,
        display: Option<&S>,
        dimensionality: usize,
    ) -> DisplayResult<InferredDomain> {
        self.infer_from_mappings(display.map(|d| d.mappings()), dimensionality)
    }

    /// Infer the domain from a set of role mappings.
    ///
    /// `None` or an empty set yields the shared generic types. Otherwise
    /// the last mapping to each axis role wins, and axes with no mapping
    /// stay unresolved.
    pub fn infer_from_mappings(
        &self,
        mappings: Option<&[RoleMapping]>,
        dimensionality: usize,
    ) -> DisplayResult<InferredDomain> {
        crate::error::validation::validate_dimensionality(dimensionality)?;

        let mappings = match mappings {
            Some(mappings) if !mappings.is_empty() => mappings,
            _ => return Ok(generic_domain(dimensionality)),
        };

        let mut domain = InferredDomain {
            x: None,
            y: None,
            z: None,
            dimensionality,
        };
        for mapping in mappings {
            match mapping.role.axis() {
                Some(Axis::X) => domain.x = Some(mapping.data_type.clone()),
                Some(Axis::Y) => domain.y = Some(mapping.data_type.clone()),
                Some(Axis::Z) => domain.z = Some(mapping.data_type.clone()),
                None => {}
            }
        }

        if let Some(axis) = domain.first_missing() {
            if self.strict {
                return Err(AxisError::Missing { axis }.into());
            }
            tracing::warn!("Display maps no data to the {} axis; leaving it unresolved", axis);
        }

        Ok(domain)
    }
}

/// Shared generic axis types
pub fn generic_domain(dimensionality: usize) -> InferredDomain {
    InferredDomain {
        x: Some(ScalarType::shared(Axis::X.generic_name())),
        y: Some(ScalarType::shared(Axis::Y.generic_name())),
        z: Some(ScalarType::shared(Axis::Z.generic_name())),
        dimensionality,
    }
}
