//! Deployment flag document handling
//!
//! Every deployment ships a `config.json` next to its datasets: boolean
//! toggles for optional registration fields plus consent texts stored under
//! locale-suffixed keys. Reads never fail; a missing document, malformed
//! JSON, an absent key or a mistyped value all fall back to the type's
//! default, and the failure goes to telemetry so it is not lost entirely.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use crate::constants::{
    APP_CONFIG_DIR, FLAG_CELSIUS, FLAG_FAHRENHEIT, FLAG_FILE_NAME, FLAG_HEIGHT,
    FLAG_PRIVACY_NOTICE, FLAG_TEMPERATURE, FLAG_WEIGHT, TEXT_PERSONAL_DATA_CONSENT,
    TEXT_PRIVACY_POLICY, TEXT_TELECONSULTATION_CONSENT, TEXT_TERMS_AND_CONDITIONS,
};
use crate::locale::Language;
use crate::telemetry::{LogTelemetry, Telemetry};

/// Failures recovered from while reading the flag document.
///
/// These never reach callers of the read methods; they are reported to the
/// store's [`Telemetry`] and a default value is returned instead.
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("Failed to read flag document {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse flag document {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Flag document {} is not a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("No {expected} value for key '{key}'")]
    Missing { key: String, expected: &'static str },
}

/// Reader for the deployment's flag document.
///
/// The document is parsed on first use and the parsed object is cached until
/// [`reload`](FlagStore::reload); flags are read at app launch and rarely
/// after, so one parse covers a whole session. Clones share the cache and
/// the telemetry sink, and the store is safe to read from multiple threads.
#[derive(Clone)]
pub struct FlagStore {
    path: PathBuf,
    telemetry: Arc<dyn Telemetry>,
    document: Arc<RwLock<Option<Arc<Map<String, Value>>>>>,
}

impl FlagStore {
    /// Opens a store backed by the given document, reporting recovered
    /// failures through the `log` facade.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_telemetry(path, Arc::new(LogTelemetry))
    }

    /// Opens a store that reports recovered failures to the given sink.
    pub fn with_telemetry<P: Into<PathBuf>>(path: P, telemetry: Arc<dyn Telemetry>) -> Self {
        Self {
            path: path.into(),
            telemetry,
            document: Arc::new(RwLock::new(None)),
        }
    }

    /// Opens the flag document from its standard locations, or `None` when
    /// no document is installed.
    pub fn discover() -> Option<Self> {
        Self::find_flag_file().map(Self::open)
    }

    /// Finds the flag document in order of precedence.
    fn find_flag_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_flags = PathBuf::from(FLAG_FILE_NAME);
        if current_dir_flags.exists() {
            return Some(current_dir_flags);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_flags = config_dir.join(APP_CONFIG_DIR).join(FLAG_FILE_NAME);
            if xdg_flags.exists() {
                return Some(xdg_flags);
            }
        }

        None
    }

    /// The document this store reads from.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Drops the cached document so the next read reparses the file.
    pub fn reload(&self) {
        if let Ok(mut cached) = self.document.write() {
            *cached = None;
        }
    }

    /// Reads a boolean flag, defaulting to `false`.
    ///
    /// A missing document, malformed JSON, an absent key or a non-boolean
    /// value all yield `false`, with the failure reported to telemetry.
    pub fn bool_flag(&self, key: &str) -> bool {
        match self.lookup(key, "boolean", Value::as_bool) {
            Ok(value) => value,
            Err(error) => {
                self.telemetry.record_error(&error);
                false
            }
        }
    }

    /// Reads a text value, defaulting to the empty string on any failure.
    pub fn text(&self, key: &str) -> String {
        match self.lookup(key, "string", |value| value.as_str().map(str::to_owned)) {
            Ok(value) => value,
            Err(error) => {
                self.telemetry.record_error(&error);
                String::new()
            }
        }
    }

    /// Reads the language-specific variant of a text value.
    ///
    /// The stored key is the prefix with the language tag appended, so
    /// `privacy_policy` under Hindi looks up `privacy_policy_hi`.
    pub fn localized_text(&self, prefix: &str, language: &Language) -> String {
        self.text(&format!("{prefix}_{}", language.tag()))
    }

    // Vitals toggles for the registration form.

    /// Whether the height field is enabled.
    pub fn height_enabled(&self) -> bool {
        self.bool_flag(FLAG_HEIGHT)
    }

    /// Whether the weight field is enabled.
    pub fn weight_enabled(&self) -> bool {
        self.bool_flag(FLAG_WEIGHT)
    }

    /// Whether the temperature field is enabled.
    pub fn temperature_enabled(&self) -> bool {
        self.bool_flag(FLAG_TEMPERATURE)
    }

    /// Whether temperature is captured in Celsius.
    pub fn celsius_enabled(&self) -> bool {
        self.bool_flag(FLAG_CELSIUS)
    }

    /// Whether temperature is captured in Fahrenheit.
    pub fn fahrenheit_enabled(&self) -> bool {
        self.bool_flag(FLAG_FAHRENHEIT)
    }

    /// Whether the privacy notice must be shown during registration.
    pub fn privacy_notice_enabled(&self) -> bool {
        self.bool_flag(FLAG_PRIVACY_NOTICE)
    }

    /// Teleconsultation consent text for the given language.
    pub fn teleconsultation_consent(&self, language: &Language) -> String {
        self.localized_text(TEXT_TELECONSULTATION_CONSENT, language)
    }

    /// Privacy policy text for the given language.
    pub fn privacy_policy(&self, language: &Language) -> String {
        self.localized_text(TEXT_PRIVACY_POLICY, language)
    }

    /// Terms and conditions text for the given language.
    pub fn terms_and_conditions(&self, language: &Language) -> String {
        self.localized_text(TEXT_TERMS_AND_CONDITIONS, language)
    }

    /// Personal data consent text for the given language.
    pub fn personal_data_consent(&self, language: &Language) -> String {
        self.localized_text(TEXT_PERSONAL_DATA_CONSENT, language)
    }

    /// Looks a key up in the cached document and converts it.
    fn lookup<T>(
        &self,
        key: &str,
        expected: &'static str,
        convert: impl Fn(&Value) -> Option<T>,
    ) -> Result<T, FlagError> {
        let document = self.document()?;
        document.get(key).and_then(convert).ok_or_else(|| FlagError::Missing {
            key: key.to_string(),
            expected,
        })
    }

    /// Returns the parsed document, parsing and caching it on first use.
    ///
    /// Failures are not cached; a later read retries the file, so a bundle
    /// installed after startup is picked up without an explicit reload.
    fn document(&self) -> Result<Arc<Map<String, Value>>, FlagError> {
        if let Ok(cached) = self.document.read() {
            if let Some(document) = cached.as_ref() {
                return Ok(Arc::clone(document));
            }
        }

        let document = Arc::new(self.parse_document()?);
        if let Ok(mut cached) = self.document.write() {
            *cached = Some(Arc::clone(&document));
        }

        Ok(document)
    }

    /// Reads and parses the backing file, requiring a top-level object.
    fn parse_document(&self) -> Result<Map<String, Value>, FlagError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| FlagError::Read {
            path: self.path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| FlagError::Parse {
            path: self.path.clone(),
            source,
        })?;

        match value {
            Value::Object(document) => Ok(document),
            _ => Err(FlagError::NotAnObject {
                path: self.path.clone(),
            }),
        }
    }
}
