use serde::Deserialize;
use std::{env, fmt, fs, path::Path};
use tracing::{debug, info};

pub const TOKEN_VAR: &str = "DATABRICKS_TOKEN";
pub const WORKSPACE_VAR: &str = "DATABRICKS_WORKSPACE";
pub const CONFIG_PATH_VAR: &str = "GATEWAY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "gateway.toml";
// Port handed to custom handlers by the serverless function host.
pub const HOST_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub listen: Option<String>,
    // Path segment the function routes are mounted under. Defaults to `api`;
    // an empty string mounts them at the root.
    pub route_prefix: Option<String>,
    // SQL text sent to the statement execution API for every request.
    // Defaults to `relay::DEFAULT_STATEMENT`.
    pub statement: Option<String>,
    // Total timeout in seconds for the upstream call. Defaults to 30.
    pub timeout_secs: Option<u64>,
    // Connection timeout in seconds for reaching the workspace.
    // If not set, uses reqwest's default behavior.
    pub connect_timeout_secs: Option<u64>,
    // Maximum number of idle connections kept alive to the workspace.
    pub pool_max_idle_per_host: Option<usize>,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let cfg_str = fs::read_to_string(path)?;
        Ok(toml::from_str(&cfg_str)?)
    }

    /// Reads the file named by `GATEWAY_CONFIG`, or `gateway.toml` when it
    /// exists. With neither present every setting takes its default.
    pub fn load() -> anyhow::Result<Self> {
        let explicit = env::var(CONFIG_PATH_VAR).ok();
        Self::load_from(explicit.as_deref(), DEFAULT_CONFIG_PATH)
    }

    fn load_from(explicit: Option<&str>, default_path: &str) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load config '{}': {}", path, e));
        }
        if Path::new(default_path).exists() {
            return Self::from_file(default_path);
        }
        info!("No {} found, using default settings", default_path);
        Ok(Self::default())
    }

    /// Address to bind. An explicit `listen` wins over the port provided by
    /// the function host.
    pub fn listen_addr(&self, host_port: Option<&str>) -> String {
        if let Some(listen) = &self.listen {
            return listen.clone();
        }
        match host_port {
            Some(port) if !port.is_empty() => format!("0.0.0.0:{}", port),
            _ => format!("0.0.0.0:{}", DEFAULT_PORT),
        }
    }
}

/// Workspace credentials, read once at startup and shared read-only by every
/// request. Either value may be empty; that is reported per request.
#[derive(Clone, Default)]
pub struct Credentials {
    pub token: String,
    pub workspace_host: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, workspace_host: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            workspace_host: workspace_host.into(),
        }
    }

    /// Loads `.env` from the working directory (if any) and reads both
    /// variables from the process environment.
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded variables from .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(
            lookup(TOKEN_VAR).unwrap_or_default(),
            lookup(WORKSPACE_VAR).unwrap_or_default(),
        )
    }

    /// Names of the variables that are unset or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.token.is_empty() {
            missing.push(TOKEN_VAR);
        }
        if self.workspace_host.is_empty() {
            missing.push(WORKSPACE_VAR);
        }
        missing
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("workspace_host", &self.workspace_host)
            .finish()
    }
}
