use serde::{Deserialize, Serialize};
use std::fmt;

/// CityId: dense index of a city inside a flight graph
///
/// Ids are assigned by the caller when registering a city and are valid
/// in `[0, num_cities)` of the graph they belong to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CityId(usize);

impl CityId {
    /// Create a CityId from a raw index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for CityId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<CityId> for usize {
    fn from(id: CityId) -> usize {
        id.0
    }
}

/// City (vertex) in the flight graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    /// Dense index
    pub id: CityId,

    /// Display name
    pub name: String,
}

impl City {
    /// Create a new city
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
