/// Default bind address for the HTTP server
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;
/// Default `tracing` filter when neither `RUST_LOG` nor config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Environment variable that overrides `server.port`
pub const PORT_ENV_VAR: &str = "PORT";
