use crate::api::AppState;
use crate::api::schemas::health::WebhookInfo;
use crate::api::schemas::webhook::{ForwardResponse, WebhookMessage};
use crate::error::Result;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

/// Validates an inbound webhook message and forwards it upstream.
///
/// # Errors
/// Returns `AppError::Validation` if the body fails schema validation; no
/// outbound call is made in that case.
/// Returns `AppError::Upstream` if the upstream answers with anything but 204.
/// Returns `AppError::UpstreamUnreachable` if the outbound call cannot complete.
pub async fn execute_webhook(
    State(state): State<AppState>,
    Path((webhook_id, webhook_token)): Path<(String, String)>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let message = WebhookMessage::from_json(&body)?;

    state.forward_service.forward(&webhook_id, &webhook_token, &message).await?;

    Ok(Json(ForwardResponse::success()))
}

/// Info probe: echoes the webhook id from the path, performing no validation
/// and no outbound call.
pub async fn webhook_info(Path((webhook_id, _webhook_token)): Path<(String, String)>) -> Json<WebhookInfo> {
    Json(WebhookInfo {
        status: "online".to_string(),
        message: "Discord Webhook Proxy is running.".to_string(),
        webhook_id,
    })
}
