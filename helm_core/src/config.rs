//! Runtime configuration (YAML/TOML)
//!
//! # Example YAML
//!
//! ```yaml
//! backend: gilrs
//! deadzone: 0.05
//! log_port_scan: true
//! ```

use crate::error::{HelmError, HelmResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the operator input stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelmConfig {
    /// Joystick driver backend identifier ("simulation", "gilrs")
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Deadzone applied by hardware backends before publishing raw axes (0.0 to <1.0)
    #[serde(default)]
    pub deadzone: f32,

    /// Emit one log line per port on every selection scan
    #[serde(default = "default_log_port_scan")]
    pub log_port_scan: bool,
}

fn default_backend() -> String {
    "simulation".to_string()
}

fn default_log_port_scan() -> bool {
    true
}

impl Default for HelmConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            deadzone: 0.0,
            log_port_scan: default_log_port_scan(),
        }
    }
}

impl HelmConfig {
    /// Create a simulation config
    pub fn simulation() -> Self {
        Self::default()
    }

    /// Create a config for the given backend
    pub fn with_backend(backend: &str) -> Self {
        Self {
            backend: backend.to_string(),
            ..Default::default()
        }
    }

    /// Check if this is a simulation backend
    pub fn is_simulation(&self) -> bool {
        self.backend == "simulation" || self.backend.starts_with("sim")
    }

    /// Reject values the drivers cannot honour
    pub fn validate(&self) -> HelmResult<()> {
        if !(0.0..1.0).contains(&self.deadzone) {
            return Err(HelmError::config(format!(
                "deadzone must be in [0.0, 1.0), got {}",
                self.deadzone
            )));
        }
        if self.backend.trim().is_empty() {
            return Err(HelmError::config("backend must not be empty"));
        }
        Ok(())
    }

    /// Load config from a file (auto-detect format)
    pub fn from_file<P: AsRef<Path>>(path: P) -> HelmResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| HelmError::config(format!("Failed to read helm config: {}", e)))?;

        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("toml") => Self::from_toml(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            _ => Self::from_yaml(&contents).or_else(|_| Self::from_toml(&contents)),
        }
    }

    /// Parse config from YAML string
    pub fn from_yaml(contents: &str) -> HelmResult<Self> {
        let config: Self = serde_yaml::from_str(contents)
            .map_err(|e| HelmError::config(format!("Failed to parse helm YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from TOML string
    pub fn from_toml(contents: &str) -> HelmResult<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| HelmError::config(format!("Failed to parse helm TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Find and load config from standard search paths
    ///
    /// Search order:
    /// 1. ./helm.yaml, ./helm.yml or ./helm.toml
    /// 2. ~/.helm/helm.yaml or ~/.helm/helm.toml
    pub fn find_and_load() -> HelmResult<Self> {
        let mut search_paths = vec![
            PathBuf::from("helm.yaml"),
            PathBuf::from("helm.yml"),
            PathBuf::from("helm.toml"),
        ];

        if let Some(home) = dirs::home_dir() {
            let helm_dir = home.join(".helm");
            search_paths.push(helm_dir.join("helm.yaml"));
            search_paths.push(helm_dir.join("helm.toml"));
        }

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading helm config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(HelmError::not_found(
            "No helm config file found in standard locations",
        ))
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> HelmResult<()> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|s| s.to_str());

        let contents = match extension {
            Some("toml") => toml::to_string_pretty(self)?,
            _ => serde_yaml::to_string(self)?,
        };

        std::fs::write(path, contents)
            .map_err(|e| HelmError::config(format!("Failed to write helm config: {}", e)))
    }
}
