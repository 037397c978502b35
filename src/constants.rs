//! Constants used throughout the application
//!
//! This module centralizes the data-bundle file names and configuration
//! document keys so call sites and deployment tooling agree on them.

// Bundle File Names
/// Feature-flag and consent-text document shipped with every deployment
pub const FLAG_FILE_NAME: &str = "config.json";
/// State → district → block hierarchy used by the address pickers
pub const STATE_DISTRICT_FILE_NAME: &str = "state_district_tehsil.json";
/// Flat province/city dataset for deployments without a state hierarchy
pub const PROVINCES_AND_CITIES_FILE_NAME: &str = "province_and_cities.json";

/// Directory under the XDG config root where deployments may install the bundle
pub const APP_CONFIG_DIR: &str = "sehat";

// Vitals Flags
pub const FLAG_HEIGHT: &str = "mHeight";
pub const FLAG_WEIGHT: &str = "mWeight";
pub const FLAG_TEMPERATURE: &str = "mTemperature";
pub const FLAG_CELSIUS: &str = "mCelsius";
pub const FLAG_FAHRENHEIT: &str = "mFahrenheit";

// Feature Flags
pub const FLAG_PRIVACY_NOTICE: &str = "privacyNotice";

// Locale-Suffixed Text Keys
// The stored key is `<prefix>_<language tag>`, e.g. "privacy_policy_hi".
pub const TEXT_TELECONSULTATION_CONSENT: &str = "teleconsultation_consent";
pub const TEXT_PRIVACY_POLICY: &str = "privacy_policy";
pub const TEXT_TERMS_AND_CONDITIONS: &str = "terms_and_conditions";
pub const TEXT_PERSONAL_DATA_CONSENT: &str = "personalDataConsentText";
