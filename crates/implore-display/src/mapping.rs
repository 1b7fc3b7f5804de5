//! Role mappings and their resolution from symbolic names
//!
//! Callers describe mappings as alternating `(type, role name)` items, for
//! example `temp, "x", pressure, "y"`. Resolution is partial: a role name
//! missing from the role table is reported and skipped, and the remaining
//! pairs still produce mappings.

use serde::{Deserialize, Serialize};

use crate::error::{validation, ConfigurationError, ConfigurationResult};
use crate::role::ScalarRole;
use crate::types::ScalarType;

/// A data type bound to a rendering role
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMapping {
    pub data_type: ScalarType,
    pub role: ScalarRole,
}

impl RoleMapping {
    pub fn new(data_type: ScalarType, role: ScalarRole) -> Self {
        Self { data_type, role }
    }

    /// Slot index of the mapped role in the engine's role array
    pub fn slot_index(&self) -> usize {
        self.role.slot_index()
    }
}

/// A fixed value for a role, attached with a reference.
///
/// Constant mappings sit outside the display's interactive mapping set and
/// are not touched when the display's role mappings change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantMapping {
    pub value: f64,
    pub role: ScalarRole,
}

impl ConstantMapping {
    pub fn new(value: f64, role: ScalarRole) -> Self {
        Self { value, role }
    }
}

/// One item of a flat `(type, role name)` argument list
#[derive(Debug, Clone, PartialEq)]
pub enum MappingToken {
    Type(ScalarType),
    Role(String),
}

impl From<ScalarType> for MappingToken {
    fn from(data_type: ScalarType) -> Self {
        MappingToken::Type(data_type)
    }
}

impl From<&ScalarType> for MappingToken {
    fn from(data_type: &ScalarType) -> Self {
        MappingToken::Type(data_type.clone())
    }
}

impl From<&str> for MappingToken {
    fn from(role: &str) -> Self {
        MappingToken::Role(role.to_string())
    }
}

impl From<String> for MappingToken {
    fn from(role: String) -> Self {
        MappingToken::Role(role)
    }
}

/// A role name that did not match the role table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedRole {
    /// Name as the caller supplied it
    pub name: String,
    /// Index of the offending pair in the input
    pub pair_index: usize,
}

/// Outcome of resolving a batch of `(type, role name)` pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Mappings in input order, skipping unresolved pairs
    pub mappings: Vec<RoleMapping>,
    /// Role names that matched nothing
    pub unresolved: Vec<UnresolvedRole>,
}

impl Resolution {
    /// Check if every pair resolved
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Names of the unresolved roles, in input order
    pub fn unresolved_names(&self) -> Vec<&str> {
        self.unresolved.iter().map(|u| u.name.as_str()).collect()
    }

    /// Take the mappings, dropping the unresolved report
    pub fn into_mappings(self) -> Vec<RoleMapping> {
        self.mappings
    }
}

/// Resolve typed `(type, role name)` pairs.
///
/// Every unresolved name is logged at `warn` and listed in the result.
pub fn resolve_pairs<I, S>(pairs: I) -> Resolution
where
    I: IntoIterator<Item = (ScalarType, S)>,
    S: AsRef<str>,
{
    let mut resolution = Resolution::default();

    for (pair_index, (data_type, role_name)) in pairs.into_iter().enumerate() {
        let role_name = role_name.as_ref();
        match ScalarRole::lookup(role_name) {
            Some(role) => resolution.mappings.push(RoleMapping::new(data_type, role)),
            None => {
                tracing::warn!(
                    "While making mappings, cannot match role '{}' (pair {}, type {})",
                    role_name,
                    pair_index,
                    data_type
                );
                resolution.unresolved.push(UnresolvedRole {
                    name: role_name.to_string(),
                    pair_index,
                });
            }
        }
    }

    resolution
}

/// Resolve a flat, alternating list of type and role-name tokens.
///
/// The whole list is checked for shape before anything resolves: an odd
/// length or a token in the wrong position fails the call.
pub fn resolve(tokens: &[MappingToken]) -> ConfigurationResult<Resolution> {
    validation::validate_pair_count(tokens.len())?;

    let mut pairs = Vec::with_capacity(tokens.len() / 2);
    for (pair_index, pair) in tokens.chunks_exact(2).enumerate() {
        let position = pair_index * 2;
        let data_type = match &pair[0] {
            MappingToken::Type(data_type) => data_type.clone(),
            MappingToken::Role(_) => {
                return Err(ConfigurationError::MisplacedToken {
                    position,
                    expected: "data type",
                })
            }
        };
        let role_name = match &pair[1] {
            MappingToken::Role(name) => name.as_str(),
            MappingToken::Type(_) => {
                return Err(ConfigurationError::MisplacedToken {
                    position: position + 1,
                    expected: "role name",
                })
            }
        };
        pairs.push((data_type, role_name));
    }

    Ok(resolve_pairs(pairs))
}
