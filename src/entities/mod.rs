//! Data holders for the bundled address hierarchy.
//!
//! The shapes mirror the published datasets key for key, including the odd
//! ones (`"tahasil"`, the capitalized `"Gram Panchayat"`). Records are built
//! once by deserialization and read-only afterwards.

use serde::{Deserialize, Deserializer};

use crate::locale::Language;

pub mod block;
pub mod district;
pub mod gram_panchayat;
pub mod state;
pub mod village;

pub use block::Block;
pub use district::District;
pub use gram_panchayat::GramPanchayat;
pub use state::State;
pub use village::Village;

/// A record carrying an English and a Hindi name, either of which may be
/// missing in the dataset.
pub trait LocalizedName {
    /// English name, when the dataset has one.
    fn name(&self) -> Option<&str>;

    /// Hindi name, when the dataset has one.
    fn name_hindi(&self) -> Option<&str>;

    /// Resolves the label to show for a language preference.
    ///
    /// Hindi gets the Hindi name, falling back to the English name when the
    /// Hindi side is missing. Every other language gets the English name
    /// only. A record with no usable name resolves to an empty string, which
    /// callers must tolerate.
    fn display_name(&self, language: &Language) -> &str {
        let preferred = if language.is_hindi() {
            self.name_hindi().or_else(|| self.name())
        } else {
            self.name()
        };
        preferred.unwrap_or("")
    }
}

/// Deserializes a list field that the datasets sometimes publish as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let values = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(values.unwrap_or_default())
}
