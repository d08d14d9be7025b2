// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT, PORT_ENV_VAR};
use crate::errors::{ConfigError, ValidationError};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Top-level service configuration.
///
/// Every section is optional; a missing section takes its defaults, so an
/// empty file is a valid configuration.
///
/// # Example
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 8080
/// storage:
///   backend: json_file
///   path: data/strings.json
/// logging:
///   filter: string_analyzer=debug,tower_http=info
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolve host and port into a socket address.
    ///
    /// `localhost` is accepted as an alias for the IPv4 loopback address.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let host = match self.host.as_str() {
            "localhost" => "127.0.0.1",
            other => other,
        };
        format!("{}:{}", host, self.port).parse()
    }
}

/// Which [`StringStore`](crate::traits::StringStore) backs the service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: Option<PathBuf>,
}

/// Storage backend implementation.
///
/// # Variants
/// * `Memory` - Records live only as long as the process
/// * `JsonFile` - Records are snapshotted to a JSON file after every change
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Memory,
    JsonFile,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Apply environment overrides, reading variables through `lookup`.
    ///
    /// Only `PORT` is recognised. Taking a lookup function keeps this
    /// testable without mutating the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PORT_ENV_VAR) {
            self.server.port = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV_VAR,
                value,
            })?;
        }
        Ok(())
    }

    /// Apply process environment overrides and validate.
    pub fn resolve(mut self) -> Result<Self, ConfigError> {
        self.apply_env_overrides(|name| std::env::var(name).ok())?;
        self.validate().map_err(ConfigError::Invalid)?;
        Ok(self)
    }

    /// Check semantic constraints, collecting every problem found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push(ValidationError::ZeroPort);
        }
        if self.logging.filter.trim().is_empty() {
            errors.push(ValidationError::EmptyLogFilter);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load a config from a YAML file, apply environment overrides and validate it
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    load_config(path)?.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = write_config("");
        let cfg = load_config(file.path()).unwrap();

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.server.port, DEFAULT_PORT);
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
server:
  host: 127.0.0.1
  port: 8080
storage:
  backend: json_file
  path: /tmp/strings.json
logging:
  filter: debug
"#,
        );
        let cfg = load_config(file.path()).unwrap();

        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.storage.backend, StorageBackend::JsonFile);
        assert_eq!(cfg.storage.path, Some(PathBuf::from("/tmp/strings.json")));
        assert_eq!(cfg.logging.filter, "debug");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let file = write_config("server:\n  port: 9000\n");
        let cfg = load_config(file.path()).unwrap();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, DEFAULT_HOST);
    }

    #[test]
    fn test_unknown_backend_is_parse_error() {
        let file = write_config("storage:\n  backend: postgres\n");
        let err = load_config(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut cfg = Config::default();
        cfg.server.port = 0;
        cfg.logging.filter = "  ".to_string();

        let errors = cfg.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroPort,
                ValidationError::EmptyLogFilter,
            ]
        );

        let message = ConfigError::Invalid(errors).to_string();
        assert!(message.contains("server.port"));
        assert!(message.contains("logging.filter"));
    }

    #[test]
    fn test_port_env_override() {
        let mut cfg = Config::default();
        cfg.apply_env_overrides(|name| (name == "PORT").then(|| "4321".to_string()))
            .unwrap();
        assert_eq!(cfg.server.port, 4321);

        let err = cfg
            .apply_env_overrides(|_| Some("not-a-port".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: "PORT", .. }));
        assert_eq!(cfg.server.port, 4321);
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 3000,
        };
        assert_eq!(server.socket_addr().unwrap(), "127.0.0.1:3000".parse().unwrap());

        let bad = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(bad.socket_addr().is_err());
    }
}
