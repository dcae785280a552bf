use std::{fmt, path::PathBuf, time::Duration};

use libs::{
    clients::ApiSettings,
    utils::{
        config::{ConfigError, FileFormat},
        setup_config,
    },
};
use serde::Deserialize;

pub const APP_NAME: &str = "devctl";

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub target: String,
    pub token: Option<String>,
    pub log_level: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: String::from("localhost:5047"),
            token: None,
            log_level: String::from("warn"),
            timeout_secs: 30,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("target", &self.target)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("log_level", &self.log_level)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Settings {
    // Default < Configfile < Env < --config file < Cli
    pub fn load(
        config_file: Option<&PathBuf>,
        target: Option<&str>,
        debug: u8,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = setup_config(APP_NAME, FileFormat::YAML, config_file)?;
        Ok(settings.with_overrides(target, debug))
    }

    pub fn with_overrides(mut self, target: Option<&str>, debug: u8) -> Self {
        if let Some(x) = target {
            self.target = x.to_string();
        }
        match debug {
            0 => {}
            1 => self.log_level = String::from("debug"),
            _ => self.log_level = String::from("trace"),
        }
        self
    }

    pub fn api(&self) -> ApiSettings {
        ApiSettings {
            target: self.target.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
