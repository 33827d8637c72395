use crate::config::{Config, Credentials};
use crate::relay::DEFAULT_STATEMENT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct AppState {
    pub client: Client,
    pub credentials: Credentials,
    pub statement: String,
}

impl AppState {
    pub fn from_config(cfg: &Config, credentials: Credentials) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(cfg.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let mut builder = Client::builder().timeout(timeout);
        if let Some(secs) = cfg.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
            debug!("Connect timeout: {}s", secs);
        }
        if let Some(max_idle) = cfg.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
            debug!("Pool max idle per host: {}", max_idle);
        }
        let client = builder.build()?;
        debug!("HTTP client created with timeout: {:?}", timeout);

        let statement = cfg
            .statement
            .clone()
            .unwrap_or_else(|| DEFAULT_STATEMENT.to_string());
        if statement.trim().is_empty() {
            anyhow::bail!("Configured statement must not be empty");
        }

        let missing = credentials.missing();
        if missing.is_empty() {
            info!(
                workspace = %credentials.workspace_host,
                "Databricks credentials loaded"
            );
        } else {
            // Requests to the data route fail until these are provided.
            warn!("Databricks credentials are missing: {}", missing.join(", "));
        }

        Ok(AppState {
            client,
            credentials,
            statement,
        })
    }
}
