use serde::{Deserialize, Serialize};

use tictactoe_core::SessionSettings;
use tictactoe_core::settings::DEFAULT_BOT_DELAY_MS;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub bot_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl ClientConfig {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            bot_delay_ms: self.bot_delay_ms,
        }
    }
}

/// Loads the YAML config; a missing file falls back to defaults, a present
/// but invalid one is an error.
pub fn load_config(path: &str) -> Result<ClientConfig, String> {
    let config = match std::fs::read_to_string(path) {
        Ok(content) => serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path, e))?,
        Err(_) => ClientConfig::default(),
    };

    config.session_settings().validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_yaml() {
        let config: ClientConfig = serde_yaml_ng::from_str("bot_delay_ms: 250").unwrap();
        assert_eq!(config.bot_delay_ms, 250);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: ClientConfig = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(config.bot_delay_ms, DEFAULT_BOT_DELAY_MS);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config("/nonexistent/tictactoe_config.yaml").unwrap();
        assert_eq!(config.bot_delay_ms, DEFAULT_BOT_DELAY_MS);
    }
}
