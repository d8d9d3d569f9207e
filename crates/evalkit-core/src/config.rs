//! Configuration loader.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Nested keys in env vars use `__`, e.g. `APP_DEVICE__PREFERENCE=cpu`.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::Error;
use crate::types::DevicePreference;

pub struct Config {
    figment: Figment,
}

/// The `[device]` section.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceConfig {
    pub preference: DevicePreference,
    pub ordinal: usize,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    pub fn load_from(base: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// The device section, or defaults when the section is absent.
    pub fn device(&self) -> crate::Result<DeviceConfig> {
        match self.figment.extract_inner::<DeviceConfig>("device") {
            Ok(device) => Ok(device),
            Err(e) if e.missing() => Ok(DeviceConfig::default()),
            Err(e) => Err(Error::InvalidConfig(format!("device: {e}"))),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.device()?;
        Ok(())
    }
}
