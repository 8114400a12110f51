use serde::Deserialize;

use crate::api::DEFAULT_API_PREFIX;
use crate::logic::layout::DEFAULT_CELL_WIDTH_PX;
use crate::session::DEFAULT_CREDENTIAL_KEYS;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// API origin, e.g. `https://api.example.com`
    pub base_url: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Storage keys checked for the bearer token, first non-empty wins
    #[serde(default = "default_credential_keys")]
    pub credential_keys: Vec<String>,
    /// Rows per page on the users list
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Nominal pixel width of a terminal cell, for the mobile breakpoint
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u16,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_api_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

fn default_credential_keys() -> Vec<String> {
    DEFAULT_CREDENTIAL_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_page_limit() -> u32 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_cell_width_px() -> u16 {
    DEFAULT_CELL_WIDTH_PX
}

impl Config {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        if config.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if config.credential_keys.is_empty() {
            anyhow::bail!("credential_keys must list at least one storage key");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_yaml("base_url: https://api.example.com\n").unwrap();
        assert_eq!(config.api_prefix, "/api/v1/");
        assert_eq!(config.credential_keys, vec!["token", "adminToken", "accessToken"]);
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.cell_width_px, 8);
        assert!(!config.vim_mode);
    }

    #[test]
    fn test_custom_credential_order() {
        let yaml = "base_url: http://localhost:5000\ncredential_keys: [accessToken, token]\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.credential_keys, vec!["accessToken", "token"]);
    }

    #[test]
    fn test_empty_credential_keys_rejected() {
        let yaml = "base_url: http://localhost:5000\ncredential_keys: []\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_missing_base_url_rejected() {
        assert!(Config::from_yaml("page_limit: 5\n").is_err());
    }
}
