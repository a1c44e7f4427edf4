use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// アプリケーション設定
///
/// 優先順位（後勝ち）:
/// 1. 組み込みのデフォルト値
/// 2. `LIBRARY__SERVER__PORT` のような `LIBRARY__` 接頭辞付きの環境変数
/// 3. `DATABASE_URL` / `PORT`
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from defaults and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars().collect())
    }

    /// 与えられた変数表から設定を組み立てる
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_url = vars.get("DATABASE_URL").cloned();
        let port = vars.get("PORT").cloned();

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("database.url", "postgres://localhost/library")?
            .set_default("database.max_connections", 5_i64)?
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("database.url", database_url)?
            .set_override_option("server.port", port)?
            .build()?;

        config.try_deserialize()
    }

    /// `host:port` 形式の待ち受けアドレス
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr_joins_host_and_port() {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/library".to_string(),
                max_connections: 5,
            },
        };

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply_without_variables() {
        let config = AppConfig::from_vars(HashMap::new()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "postgres://localhost/library");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_prefixed_variables_override_defaults() {
        let config = AppConfig::from_vars(vars(&[
            ("LIBRARY__SERVER__HOST", "127.0.0.1"),
            ("LIBRARY__SERVER__PORT", "4000"),
            ("LIBRARY__DATABASE__MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database.max_connections, 12);
    }

    #[test]
    fn test_database_url_and_port_win_over_prefixed_variables() {
        let config = AppConfig::from_vars(vars(&[
            ("LIBRARY__SERVER__PORT", "4000"),
            ("LIBRARY__DATABASE__URL", "postgres://prefixed/library"),
            ("PORT", "5000"),
            ("DATABASE_URL", "postgres://db/library"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.url, "postgres://db/library");
    }
}
