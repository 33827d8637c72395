use crate::config::Credentials;
use crate::error::RelayError;
use crate::state::AppState;
use axum::{extract::State, Json};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

pub const DEFAULT_STATEMENT: &str = "SELECT * FROM my_table";
pub const STATEMENTS_ENDPOINT: &str = "/api/2.0/sql/statements/execute";

#[derive(Serialize)]
struct StatementRequest<'a> {
    statement: &'a str,
}

/// Builds the statement execution URL for a workspace. A bare host is
/// reached over https; a host that already carries a scheme is kept as is.
pub fn statement_url(workspace_host: &str) -> String {
    let host = workspace_host.trim().trim_end_matches('/');
    if host.starts_with("https://") || host.starts_with("http://") {
        format!("{}{}", host, STATEMENTS_ENDPOINT)
    } else {
        format!("https://{}{}", host, STATEMENTS_ENDPOINT)
    }
}

/// Runs `statement` on the workspace and returns the response document
/// untouched. Nothing is sent when credentials are missing.
pub async fn execute_statement(
    client: &Client,
    credentials: &Credentials,
    statement: &str,
) -> Result<Value, RelayError> {
    let missing = credentials.missing();
    if !missing.is_empty() {
        return Err(RelayError::Configuration(missing));
    }

    let url = statement_url(&credentials.workspace_host);
    debug!(%url, "Submitting statement to workspace");

    // An unparseable workspace host surfaces from send() as a request error.
    let resp = client
        .post(url)
        .header("Authorization", format!("Bearer {}", credentials.token))
        .json(&StatementRequest { statement })
        .send()
        .await?
        .error_for_status()?;
    let status = resp.status();
    let body = resp.bytes().await?;
    debug!(%status, bytes = body.len(), "Workspace responded");

    Ok(serde_json::from_slice(&body)?)
}

pub async fn databricks_data_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, RelayError> {
    info!("Databricks data request received");

    match execute_statement(&state.client, &state.credentials, &state.statement).await {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            error!(kind = e.kind(), "{}", e);
            Err(e)
        }
    }
}
