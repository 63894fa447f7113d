//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/visitext/config.toml` (XDG) or platform config dir
//! 2. Project config: `.visitext.toml`
//! 3. Environment variables: `VISITEXT_*` (`__` separates nested keys)
//!
//! Every key is optional:
//! ```toml
//! [defaults]
//! mutant_type = "CLASS"
//! namespace_uri = "http://example.com/ns"
//!
//! [output]
//! format = "toon"
//! ```
//!
//! The same values from the environment:
//! `VISITEXT_DEFAULTS__MUTANT_TYPE=UML`, `VISITEXT_OUTPUT__FORMAT=json`.

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::Deserialize;

use crate::models::MutantType;
use crate::output::OutputFormat;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".visitext.toml";

/// Key path of the default namespace, read from the environment as raw text.
const NAMESPACE_KEY: &str = "defaults.namespace_uri";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Fallback values for building new model metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Model type used when none is given on the command line.
    pub mutant_type: Option<MutantType>,
    /// Namespace URI used when none is given on the command line.
    #[serde(default)]
    pub namespace_uri: String,
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();
        tracing::debug!("Resolving config (user config: {})", user_config.display());

        Self::figment(user_config)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the layered figment with the given user config path.
    pub fn figment(user_config: PathBuf) -> Figment {
        let figment = Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(PROJECT_CONFIG_FILE))
            // Layer 3: Environment variables (highest priority)
            .merge(Self::env().ignore(&[NAMESPACE_KEY]));

        // Env parses values into typed scalars; namespaces stay opaque text
        let raw_namespace = Self::env()
            .iter()
            .find(|(key, _)| key.as_str() == NAMESPACE_KEY)
            .map(|(_, value)| value);

        match raw_namespace {
            Some(namespace) => figment.merge(Serialized::default(NAMESPACE_KEY, namespace)),
            None => figment,
        }
    }

    fn env() -> Env {
        Env::prefixed("VISITEXT_").split("__")
    }

    /// User config path: ~/.config/visitext/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("visitext").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("visitext").join("config.toml"))
            .unwrap_or_default()
    }
}
