//! State record, the top level of the address hierarchy

use serde::{Deserialize, Serialize};

use super::{District, LocalizedName};

/// A state, the root of the address hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct State {
    /// English name
    #[serde(rename = "state")]
    pub name: Option<String>,
    /// Hindi name
    #[serde(rename = "state-hi")]
    pub name_hindi: Option<String>,
    /// Districts in this state
    #[serde(deserialize_with = "super::null_as_empty")]
    pub districts: Vec<District>,
}

impl State {
    /// Finds a district by its English name.
    pub fn district(&self, name: &str) -> Option<&District> {
        self.districts
            .iter()
            .find(|district| district.name.as_deref() == Some(name))
    }
}

impl LocalizedName for State {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_hindi(&self) -> Option<&str> {
        self.name_hindi.as_deref()
    }
}
