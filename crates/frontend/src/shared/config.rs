use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub inventory: InventoryConfig,
    pub request: RequestConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix of every endpoint path, e.g. "/api"
    pub base_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InventoryConfig {
    /// `per_page` sent with every equipment query
    pub per_page: u32,
    /// Number of items shown in the Home equipment panel
    pub preview_limit: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RequestConfig {
    /// Checkout window used for the request return date
    pub window_days: i64,
    /// Endpoint the request is POSTed to; without it requests cannot be sent
    #[serde(default)]
    pub submit_path: Option<String>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_path = "/api"

[inventory]
per_page = 100
preview_limit = 4

[request]
window_days = 7
"#;

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<ConsoleConfig> {
    let config: ConsoleConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Load configuration from a TOML document, falling back to the embedded
/// defaults for every key the document omits.
pub fn load_config_with_overrides(overrides: &str) -> anyhow::Result<ConsoleConfig> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overrides: toml::Table = toml::from_str(overrides)?;
    merge_tables(&mut merged, overrides);
    let config: ConsoleConfig = toml::Value::Table(merged).try_into()?;
    log::info!("Using console configuration with overrides: {:?}", config);
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        if let toml::Value::Table(nested) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, nested);
                continue;
            }
            base.insert(key, toml::Value::Table(nested));
        } else {
            base.insert(key, value);
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_path: "/api".to_string(),
            },
            inventory: InventoryConfig {
                per_page: 100,
                preview_limit: 4,
            },
            request: RequestConfig {
                window_days: 7,
                submit_path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.inventory.per_page, 100);
        assert_eq!(config.request.window_days, 7);
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let config = load_config_with_overrides(
            r#"
            [inventory]
            per_page = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.inventory.per_page, 25);
        assert_eq!(config.inventory.preview_limit, 4);
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.request.submit_path, None);
    }

    #[test]
    fn test_submit_path_override() {
        let config = load_config_with_overrides(
            r#"
            [request]
            submit_path = "/requests"
            "#,
        )
        .unwrap();
        assert_eq!(config.request.submit_path.as_deref(), Some("/requests"));
        assert_eq!(config.request.window_days, 7);
    }

    #[test]
    fn test_invalid_overrides_fail() {
        assert!(load_config_with_overrides("[inventory]\nper_page = \"many\"").is_err());
    }
}
