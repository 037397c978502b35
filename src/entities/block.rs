//! Block record of the address hierarchy

use serde::{Deserialize, Serialize};

use super::{GramPanchayat, LocalizedName};

/// An administrative block inside a district.
///
/// The datasets store a block's gram panchayats under the literal
/// `"Gram Panchayat"` key, capital letters and space included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Block {
    /// English name
    pub name: Option<String>,
    /// Hindi name
    #[serde(rename = "name-hi")]
    pub name_hindi: Option<String>,
    /// Gram panchayats in this block
    #[serde(rename = "Gram Panchayat", deserialize_with = "super::null_as_empty")]
    pub gram_panchayats: Vec<GramPanchayat>,
}

impl Block {
    /// Finds a gram panchayat by its English name.
    pub fn gram_panchayat(&self, name: &str) -> Option<&GramPanchayat> {
        self.gram_panchayats
            .iter()
            .find(|panchayat| panchayat.name.as_deref() == Some(name))
    }
}

impl LocalizedName for Block {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_hindi(&self) -> Option<&str> {
        self.name_hindi.as_deref()
    }
}
