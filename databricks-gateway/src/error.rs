use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure of a Databricks relay request. Every variant is reported to the
/// caller as a plain-text `500`.
#[derive(Debug, Error)]
pub enum RelayError {
    /// One or more credentials are unset or empty. Holds the variable names.
    #[error("Databricks credentials are missing: {}", .0.join(", "))]
    Configuration(Vec<&'static str>),
    /// Transport failure or non-2xx status from the workspace.
    #[error("Error fetching Databricks data: {0}")]
    UpstreamHttp(#[from] reqwest::Error),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Configuration(_) => "configuration",
            RelayError::UpstreamHttp(_) => "upstream_http",
            RelayError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::Unexpected(e.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TOKEN_VAR, WORKSPACE_VAR};

    #[test]
    fn configuration_message_names_missing_variables() {
        let err = RelayError::Configuration(vec![TOKEN_VAR, WORKSPACE_VAR]);
        assert_eq!(
            err.to_string(),
            "Databricks credentials are missing: DATABRICKS_TOKEN, DATABRICKS_WORKSPACE"
        );
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn json_errors_are_unexpected() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = RelayError::from(parse_err);
        assert_eq!(err.kind(), "unexpected");
        assert!(err.to_string().starts_with("Unexpected error: "));
    }

    #[tokio::test]
    async fn every_variant_maps_to_plain_text_500() {
        let resp = RelayError::Unexpected("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        let bytes = hyper::body::to_bytes(resp.into_body())
            .await
            .expect("bytes");
        assert_eq!(&bytes[..], b"Unexpected error: boom");
    }
}
