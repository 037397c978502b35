//! Sehat - Shared utilities for the patient-registration apps
//!
//! This library bundles the pieces every deployment of the registration
//! apps needs: typed models for the bilingual address datasets shipped
//! with a deployment, a tolerant reader for the deployment's flag
//! document, and date/time helpers for the text timestamps synced
//! records are exchanged in.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`gazetteer`] - Address dataset loading and name lookup
//! * [`entities`] - Records of the state → village hierarchy
//! * [`config`] - Deployment flag document reader
//! * [`locale`] - Language preference handling
//! * [`telemetry`] - Reporting of recovered failures
//! * [`utils`] - Date/time helpers

/// Deployment flag document reader
pub mod config;

/// Bundle file names and flag document keys
pub mod constants;

/// Data holders for the address hierarchy
pub mod entities;

/// Address dataset loading and lookup
pub mod gazetteer;

/// Language preference handling
pub mod locale;

/// Reporting of recovered failures
pub mod telemetry;

/// Utility functions for date/time handling
pub mod utils;

// Re-export the types almost every caller touches
pub use config::{FlagError, FlagStore};
pub use entities::{Block, District, GramPanchayat, LocalizedName, State, Village};
pub use gazetteer::{Gazetteer, ProvincesAndCities};
pub use locale::Language;
pub use telemetry::{LogTelemetry, MemoryTelemetry, Telemetry};
