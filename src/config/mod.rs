//! Configuration module for datascope.
//!
//! Handles the settings file, environment variables, and logging level.

mod settings;

pub use settings::{
    expand_env_vars, CatalogSettings, LoggingSettings, OutputSettings, Settings, SettingsError,
    CONFIG_ENV_VAR,
};
