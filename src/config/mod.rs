// Configuration module entry point
// Loads the process-wide configuration once at startup

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::{
    AssetsConfig, Config, LoggingConfig, PerformanceConfig, ServerConfig, DEFAULT_DOCUMENT,
    DEFAULT_PORT, DEFAULT_ROOT,
};

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional. Environment variables prefixed with `SERVER_`
    /// override it, using `__` between nested keys (`SERVER_ASSETS__ROOT`).
    pub fn load_from(config_path: &str) -> Result<Self, ServerError> {
        Self::load_with_env(config_path, environment())
    }

    fn load_with_env(
        config_path: &str,
        env: ::config::Environment,
    ) -> Result<Self, ServerError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("assets.root", DEFAULT_ROOT)?
            .set_default("assets.default_document", DEFAULT_DOCUMENT)?
            .set_default("assets.block_traversal", true)?
            .set_default("assets.detect_content_type", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.read_timeout", 30)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}

/// `SERVER_`-prefixed variables, `__` between nested keys
fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix("SERVER")
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/asset-server").unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.assets.root, "./public");
        assert_eq!(cfg.assets.default_document, "index.html");
        assert!(cfg.assets.block_traversal);
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[assets]\nroot = \"./dist\"\nblock_traversal = false\n",
        )
        .unwrap();

        let stem = dir.path().join("server");
        let cfg = Config::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.assets.root, "./dist");
        assert!(!cfg.assets.block_traversal);
        // untouched sections keep their defaults
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_environment_overrides_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("server.toml"),
            "[server]\nport = 9100\n\n[assets]\nroot = \"./public\"\n",
        )
        .unwrap();

        let vars: ::config::Map<String, String> = [
            ("SERVER_ASSETS__ROOT", "./dist"),
            ("SERVER_SERVER__PORT", "9001"),
            ("SERVER_ASSETS__BLOCK_TRAVERSAL", "false"),
            ("SERVER_PERFORMANCE__MAX_CONNECTIONS", "64"),
            ("OTHER_ASSETS__ROOT", "./ignored"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let stem = dir.path().join("server");
        let cfg = Config::load_with_env(stem.to_str().unwrap(), environment().source(Some(vars)))
            .unwrap();
        assert_eq!(cfg.assets.root, "./dist");
        assert_eq!(cfg.server.port, 9001);
        assert!(!cfg.assets.block_traversal);
        assert_eq!(cfg.performance.max_connections, Some(64));
        assert_eq!(cfg.assets.default_document, "index.html");
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::default();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 8123;
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:8123".parse::<SocketAddr>().unwrap()
        );

        cfg.server.host = "not an ip".to_string();
        assert!(matches!(
            cfg.get_socket_addr(),
            Err(ServerError::InvalidAddress { .. })
        ));
    }
}
