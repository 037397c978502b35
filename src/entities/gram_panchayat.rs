//! Gram panchayat record, the village-cluster level of the address hierarchy

use serde::{Deserialize, Serialize};

use super::{LocalizedName, Village};

/// A gram panchayat inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GramPanchayat {
    /// English name
    pub name: Option<String>,
    /// Hindi name
    #[serde(rename = "name-hi")]
    pub name_hindi: Option<String>,
    /// Villages in this gram panchayat
    #[serde(rename = "village", deserialize_with = "super::null_as_empty")]
    pub villages: Vec<Village>,
}

impl GramPanchayat {
    /// Finds a village by its English name.
    pub fn village(&self, name: &str) -> Option<&Village> {
        self.villages.iter().find(|village| village.name.as_deref() == Some(name))
    }
}

impl LocalizedName for GramPanchayat {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_hindi(&self) -> Option<&str> {
        self.name_hindi.as_deref()
    }
}
