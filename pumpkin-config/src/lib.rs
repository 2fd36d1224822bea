use inventory::InventoryConfig;
use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{fs, path::Path, sync::LazyLock};

pub mod inventory;
pub mod logging;

pub static ADVANCED_CONFIG: LazyLock<AdvancedConfiguration> =
    LazyLock::new(AdvancedConfiguration::load);

pub static BASIC_CONFIG: LazyLock<BasicConfiguration> = LazyLock::new(BasicConfiguration::load);

/// Tuning knobs which most bots never need to touch.
#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
    pub inventory: InventoryConfig,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfiguration {
    /// The address of the server to join, `host:port`.
    pub server_address: String,
    /// The name the bot reports to the server.
    pub username: String,
    /// The language code sent in the client data.
    pub locale: String,
}

impl Default for BasicConfiguration {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:19132".to_string(),
            username: "PumpkinBot".to_string(),
            locale: "en_US".to_string(),
        }
    }
}

trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", path));

            toml::from_str(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. This is probably caused by a config update, just delete the old config and start again",
                    path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!(
                            "Couldn't write default config to {:?}. Reason: {}",
                            path, err
                        );
                    }
                }
                Err(err) => warn!("Couldn't serialize default config {:?}. Reason: {}", path, err),
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) {
        self.inventory.validate();
    }
}

impl LoadTomlConfiguration for BasicConfiguration {
    fn get_path() -> &'static Path {
        Path::new("configuration.toml")
    }

    fn validate(&self) {
        assert!(
            self.server_address.contains(':'),
            "Server address must be in the form host:port"
        );
        assert!(!self.username.is_empty(), "Username must not be empty");
    }
}

#[cfg(test)]
mod tests {
    use super::{AdvancedConfiguration, BasicConfiguration};

    #[test]
    fn partial_features_file_keeps_defaults() {
        let config: AdvancedConfiguration = toml::from_str(
            r#"
            [inventory]
            max_pending_changes = 64
            "#,
        )
        .unwrap();
        assert_eq!(config.inventory.max_pending_changes, 64);
        assert_eq!(config.inventory.pending_change_expiry_ms, 5000);
        assert!(config.logging.enabled);
    }

    #[test]
    fn basic_defaults_round_trip_through_toml() {
        let text = toml::to_string(&BasicConfiguration::default()).unwrap();
        let parsed: BasicConfiguration = toml::from_str(&text).unwrap();
        assert_eq!(parsed.username, "PumpkinBot");
    }
}
