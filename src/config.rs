use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub list_path: String,
    pub upsert_path: String,
    pub delete_path: String,
    pub timeout_ms: u64,  // applies to every remote call
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FormConfig {
    pub expire_date: String,
    pub footer_message: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1/admin".to_string(),
            list_path: "get_users.php".to_string(),
            upsert_path: "add_user_api.php".to_string(),
            delete_path: "delete_user.php".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            expire_date: "2025-01-01".to_string(),
            footer_message: "Welcome".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Config pointing at `base_url` with the stock endpoint paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn list_url(&self) -> String {
        self.endpoint(&self.list_path)
    }

    pub fn upsert_url(&self) -> String {
        self.endpoint(&self.upsert_path)
    }

    pub fn delete_url(&self) -> String {
        self.endpoint(&self.delete_path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Layers built-in defaults, `config/default`, an optional extra file and
    /// `APP_*` environment variables, in that order.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
