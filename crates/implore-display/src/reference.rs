//! Data references and geometric primitives
//!
//! A [`DataReference`] is a named, rebindable slot that ties data to a
//! display. Handles are cheap to clone and share one slot, so the caller
//! can keep a handle and rebind the data after attachment.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::engine::DisplaySurface;
use crate::error::{
    validation, ConfigurationError, ConfigurationResult, DisplayError, DisplayResult,
};
use crate::mapping::ConstantMapping;
use crate::types::{DataType, ScalarType};

/// An ordered path of 2D or 3D points over a domain tuple
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricPrimitive {
    domain: Vec<ScalarType>,
    points: Vec<Vec<f64>>,
}

impl GeometricPrimitive {
    /// Build a primitive from point-major coordinates (`[[x0, y0], [x1, y1], ...]`).
    ///
    /// Every point must have the same arity, 2 or 3, and the domain must
    /// have one component per coordinate.
    pub fn from_points(domain: Vec<ScalarType>, points: Vec<Vec<f64>>) -> ConfigurationResult<Self> {
        let dimensionality = validation::validate_point_arity(&points)?;
        validation::validate_domain_arity(dimensionality, domain.len())?;
        Ok(Self { domain, points })
    }

    /// Build a primitive from component-major coordinates
    /// (`[[x0, x1, ...], [y0, y1, ...]]`).
    pub fn from_components(
        domain: Vec<ScalarType>,
        components: &[Vec<f64>],
    ) -> ConfigurationResult<Self> {
        Self::from_points(domain, transpose(components)?)
    }

    /// Domain tuple, one scalar type per coordinate
    pub fn domain(&self) -> &[ScalarType] {
        &self.domain
    }

    /// Domain as a tuple data type
    pub fn domain_type(&self) -> DataType {
        DataType::Tuple(self.domain.clone())
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Components per point (2 or 3)
    pub fn dimensionality(&self) -> usize {
        self.domain.len()
    }
}

/// Convert component-major rows into points.
///
/// The row count is the point dimensionality; every row must be as long as
/// the first.
pub fn transpose(components: &[Vec<f64>]) -> ConfigurationResult<Vec<Vec<f64>>> {
    validation::validate_dimensionality(components.len())?;
    let count = components[0].len();

    for (index, row) in components.iter().enumerate() {
        if row.len() != count {
            return Err(ConfigurationError::PointArity {
                index,
                expected: count,
                found: row.len(),
            });
        }
    }

    Ok((0..count)
        .map(|i| components.iter().map(|row| row[i]).collect())
        .collect())
}

/// Data bound to a reference
#[derive(Clone)]
pub enum BoundData {
    /// A synthesized line or path
    Primitive(GeometricPrimitive),
    /// Any other data object, opaque to the display layer
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl BoundData {
    /// Wrap an arbitrary data object
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        BoundData::Opaque(Arc::new(value))
    }

    pub fn as_primitive(&self) -> Option<&GeometricPrimitive> {
        match self {
            BoundData::Primitive(primitive) => Some(primitive),
            BoundData::Opaque(_) => None,
        }
    }

    /// Borrow an opaque value as its concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            BoundData::Opaque(value) => value.downcast_ref::<T>(),
            BoundData::Primitive(_) => None,
        }
    }
}

impl fmt::Debug for BoundData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundData::Primitive(primitive) => f.debug_tuple("Primitive").field(primitive).finish(),
            BoundData::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<GeometricPrimitive> for BoundData {
    fn from(primitive: GeometricPrimitive) -> Self {
        BoundData::Primitive(primitive)
    }
}

#[derive(Debug)]
struct ReferenceState {
    data: Option<BoundData>,
    constants: Vec<ConstantMapping>,
}

/// A named, rebindable binding of data to a display
#[derive(Debug, Clone)]
pub struct DataReference {
    name: Arc<str>,
    state: Arc<RwLock<ReferenceState>>,
}

impl DataReference {
    /// Create an unbound reference
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            state: Arc::new(RwLock::new(ReferenceState {
                data: None,
                constants: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently bound data
    pub fn data(&self) -> Option<BoundData> {
        self.state.read().unwrap_or_else(|e| e.into_inner()).data.clone()
    }

    /// Bind (or rebind) data
    pub fn set_data(&self, data: impl Into<BoundData>) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.data = Some(data.into());
    }

    pub fn is_bound(&self) -> bool {
        self.state.read().unwrap_or_else(|e| e.into_inner()).data.is_some()
    }

    /// Fixed attributes recorded when the reference was attached
    pub fn constants(&self) -> Vec<ConstantMapping> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .constants
            .clone()
    }

    /// Check if two handles share the same slot
    pub fn same_slot(&self, other: &DataReference) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn record_constants(&self, constants: &[ConstantMapping]) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.constants = constants.to_vec();
    }
}

/// Creates references on displays and binds their data
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceBinder {
    reject_duplicates: bool,
}

impl ReferenceBinder {
    /// Binder that leaves name uniqueness to the display
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail fast when the display already has a reference with the same name
    pub fn rejecting_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }

    /// Create a reference named `name` on `surface`.
    ///
    /// The reference is attached first with its fixed attributes, then
    /// bound to `data` if any was given.
    pub fn bind<S: DisplaySurface>(
        &self,
        name: &str,
        data: Option<BoundData>,
        surface: &mut S,
        constants: Option<&[ConstantMapping]>,
    ) -> DisplayResult<DataReference> {
        if self.reject_duplicates && surface.reference_names().iter().any(|n| n == name) {
            return Err(DisplayError::DuplicateReference {
                display: surface.name().to_string(),
                name: name.to_string(),
            });
        }

        let constants = constants.unwrap_or(&[]);
        let reference = DataReference::new(name);
        reference.record_constants(constants);
        surface.attach_reference(&reference, constants)?;

        if let Some(data) = data {
            reference.set_data(data);
        }

        tracing::debug!(
            "Attached reference '{}' to '{}' ({} fixed attributes, bound: {})",
            name,
            surface.name(),
            constants.len(),
            reference.is_bound()
        );

        Ok(reference)
    }
}
