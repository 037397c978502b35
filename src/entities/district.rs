//! District record of the address hierarchy

use serde::{Deserialize, Serialize};

use super::{Block, LocalizedName};

/// A district inside a state.
///
/// Tehsils are plain strings in the datasets, with no Hindi side. Blocks
/// come twice: `"block"` carries the English-named tree and `"block-hi"`
/// the Hindi-named one, and the two lists are not guaranteed to line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct District {
    /// English name
    pub name: Option<String>,
    /// Hindi name
    #[serde(rename = "name-hi")]
    pub name_hindi: Option<String>,
    /// Tehsil names
    #[serde(rename = "tahasil", deserialize_with = "super::null_as_empty")]
    pub tehsils: Vec<String>,
    /// Blocks with English names
    #[serde(rename = "block", deserialize_with = "super::null_as_empty")]
    pub blocks: Vec<Block>,
    /// Blocks with Hindi names
    #[serde(rename = "block-hi", deserialize_with = "super::null_as_empty")]
    pub blocks_hindi: Vec<Block>,
}

impl District {
    /// Finds a block by its English name.
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.name.as_deref() == Some(name))
    }

    /// Whether the district lists a tehsil with this exact name.
    pub fn has_tehsil(&self, name: &str) -> bool {
        self.tehsils.iter().any(|tehsil| tehsil == name)
    }
}

impl LocalizedName for District {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_hindi(&self) -> Option<&str> {
        self.name_hindi.as_deref()
    }
}
