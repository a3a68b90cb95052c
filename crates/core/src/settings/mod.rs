//! Application configuration: season window and company logo.

mod settings_service;

pub use settings_service::{SettingsService, SettingsServiceTrait};
