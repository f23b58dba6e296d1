//! src/configuration.rs

use crate::registration::{CompositionStyle, RegistrationForm};
use std::path::Path;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub demo: DemoSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
    pub log_level: String,
}

/// Inputs the binary runs through the pipeline on startup.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct DemoSettings {
    pub styles: Vec<CompositionStyle>,
    pub registrations: Vec<RegistrationForm>,
}

/// Read `configuration/` below the current working directory, picking the
/// environment file from `APP_ENVIRONMENT` (defaults to `local`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    get_configuration_for(&base_path.join("configuration"), environment)
}

pub fn get_configuration_for(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_APPLICATION__LOG_LEVEL=debug` would set `Settings.application.log_level`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
