//! Loading and lookup for the bundled address datasets.
//!
//! Deployments ship two JSON documents alongside the flag document: the
//! state hierarchy used by the cascading address pickers, and a flat
//! province/city dataset for countries without the hierarchy. Both are
//! produced by deployment tooling and read-only here.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::entities::State;

/// The state → district → block → gram panchayat → village hierarchy.
///
/// Lookups are exact matches on English names, one level at a time, the way
/// the address pickers drill down:
///
/// ```rust,no_run
/// # use sehat::Gazetteer;
/// # fn demo(gazetteer: &Gazetteer) -> Option<&sehat::Block> {
/// let block = gazetteer
///     .state("Madhya Pradesh")?
///     .district("Bhopal")?
///     .block("Phanda")?;
/// # Some(block)
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Gazetteer {
    /// All states, in dataset order
    #[serde(deserialize_with = "crate::entities::null_as_empty")]
    pub states: Vec<State>,
}

impl Gazetteer {
    /// Parses the hierarchy from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse state hierarchy document")
    }

    /// Loads the hierarchy from a dataset file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read dataset file: {}", path.as_ref().display()))?;

        let gazetteer: Gazetteer = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dataset file: {}", path.as_ref().display()))?;

        Ok(gazetteer)
    }

    /// Finds a state by its English name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|state| state.name.as_deref() == Some(name))
    }
}

/// Flat province and city lists for deployments without a state hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProvincesAndCities {
    /// Province names
    #[serde(deserialize_with = "crate::entities::null_as_empty")]
    pub provinces: Vec<String>,
    /// City names
    #[serde(deserialize_with = "crate::entities::null_as_empty")]
    pub cities: Vec<String>,
}

impl ProvincesAndCities {
    /// Parses the dataset from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse province and city document")
    }

    /// Loads the dataset from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read dataset file: {}", path.as_ref().display()))?;

        let dataset: ProvincesAndCities = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dataset file: {}", path.as_ref().display()))?;

        Ok(dataset)
    }

    /// Finds a province by exact name.
    pub fn province(&self, name: &str) -> Option<&str> {
        self.provinces
            .iter()
            .find(|province| province.as_str() == name)
            .map(String::as_str)
    }

    /// Finds a city by exact name.
    pub fn city(&self, name: &str) -> Option<&str> {
        self.cities.iter().find(|city| city.as_str() == name).map(String::as_str)
    }
}
