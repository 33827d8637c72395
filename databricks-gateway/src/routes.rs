use crate::placeholder::{adx_data_handler, chatbot_handler};
use crate::relay::databricks_data_handler;
use crate::state::AppState;
use axum::{routing::any, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub const DEFAULT_ROUTE_PREFIX: &str = "api";

fn route_path(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("/{}", name)
    } else {
        format!("/{}/{}", prefix, name)
    }
}

/// Mounts the three function routes under `prefix`. Each accepts any method.
pub fn build_router(state: Arc<AppState>, prefix: &str) -> Router {
    let data = route_path(prefix, "GetDatabricksData");
    let adx = route_path(prefix, "GetADXData");
    let chatbot = route_path(prefix, "ChatbotADXFunction");
    debug!(%data, %adx, %chatbot, "Mounting routes");

    Router::new()
        .route(&data, any(databricks_data_handler))
        .route(&adx, any(adx_data_handler))
        .route(&chatbot, any(chatbot_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
