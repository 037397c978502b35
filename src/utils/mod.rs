//! Utility modules shared across the registration apps.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and time formatting, parsing, and timezone conversion

pub mod datetime;
