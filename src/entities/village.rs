//! Village record, the innermost level of the address hierarchy

use serde::{Deserialize, Serialize};

use super::LocalizedName;

/// A village inside a gram panchayat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Village {
    /// English name
    pub name: Option<String>,
    /// Hindi name
    #[serde(rename = "name-hi")]
    pub name_hindi: Option<String>,
}

impl LocalizedName for Village {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn name_hindi(&self) -> Option<&str> {
        self.name_hindi.as_deref()
    }
}
