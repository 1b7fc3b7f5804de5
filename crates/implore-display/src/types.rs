//! Data type identifiers
//!
//! A [`ScalarType`] names one dimension of data (temperature, pressure,
//! ...). The display layer never looks inside a type; it only compares
//! identities and, for tuples, walks the component order.
//!
//! Identity is carried by a UUID rather than the name, so two independently
//! created types called "temp" stay distinct. The generic axis types "x",
//! "y" and "z" are the exception: they come from a shared [`TypeRegistry`]
//! and are handed out get-or-create by name, so every caller in the process
//! sees the same identity.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque identifier for a single dimension of data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarType {
    id: Uuid,
    name: String,
}

impl ScalarType {
    /// Create a new, distinct scalar type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Get the shared type registered under `name`, creating it on first use
    pub fn shared(name: &str) -> Self {
        TypeRegistry::global().get_or_create(name)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A scalar type or an ordered tuple of scalar types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Scalar(ScalarType),
    Tuple(Vec<ScalarType>),
}

impl DataType {
    /// Number of scalar components
    pub fn dimension(&self) -> usize {
        match self {
            DataType::Scalar(_) => 1,
            DataType::Tuple(components) => components.len(),
        }
    }

    /// Components in order
    pub fn components(&self) -> Vec<&ScalarType> {
        match self {
            DataType::Scalar(scalar) => vec![scalar],
            DataType::Tuple(components) => components.iter().collect(),
        }
    }

    /// Components in order, by value
    pub fn into_components(self) -> Vec<ScalarType> {
        match self {
            DataType::Scalar(scalar) => vec![scalar],
            DataType::Tuple(components) => components,
        }
    }
}

impl From<ScalarType> for DataType {
    fn from(scalar: ScalarType) -> Self {
        DataType::Scalar(scalar)
    }
}

impl From<Vec<ScalarType>> for DataType {
    fn from(components: Vec<ScalarType>) -> Self {
        DataType::Tuple(components)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Scalar(scalar) => write!(f, "{}", scalar),
            DataType::Tuple(components) => {
                let names: Vec<&str> = components.iter().map(|c| c.name()).collect();
                write!(f, "({})", names.join(", "))
            }
        }
    }
}

lazy_static! {
    static ref GLOBAL_TYPES: TypeRegistry = TypeRegistry::new();
}

/// Name-keyed registry of shared scalar types.
///
/// Lookups are idempotent: the first request for a name creates the type,
/// every later request returns that same type.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<String, ScalarType>>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL_TYPES
    }

    /// Get the type registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<ScalarType> {
        let types = self.types.read().unwrap_or_else(|e| e.into_inner());
        types.get(name).cloned()
    }

    /// Get the type registered under `name`, creating it if absent
    pub fn get_or_create(&self, name: &str) -> ScalarType {
        if let Some(existing) = self.get(name) {
            return existing;
        }

        let mut types = self.types.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have won the race between the two locks
        types
            .entry(name.to_string())
            .or_insert_with(|| ScalarType::new(name))
            .clone()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
