use anyhow::{Context, Result};
use mikro_events::ServiceDescriptor;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MikroConfig {
    /// Remote services selectable on the login form, in display order.
    #[serde(default = "default_services")]
    pub services: Vec<ServiceDescriptor>,
}

fn default_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor {
            name: "Channel W".to_string(),
            url: "https://channelw.mikrocal.dev".to_string(),
        },
        ServiceDescriptor {
            name: "Channel W Test".to_string(),
            url: "https://test.channelw.mikrocal.dev".to_string(),
        },
    ]
}

impl Default for MikroConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
        }
    }
}

impl MikroConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("mikro-tui")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_production_and_test_services() {
        let config = MikroConfig::default();
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services[0].name, "Channel W");
        assert_eq!(config.services[1].name, "Channel W Test");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = MikroConfig::default();
        let raw = toml::to_string_pretty(&config).unwrap();
        let parsed: MikroConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.services, config.services);
    }
}
