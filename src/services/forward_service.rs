use crate::api::schemas::webhook::WebhookMessage;
use crate::config::UpstreamConfig;
use crate::error::{AppError, Result};
use reqwest::StatusCode;
use std::time::Duration;

/// Performs the single outbound call a forwarded message results in.
///
/// The destination is always `{api_base}/{webhook_id}/{webhook_token}`; no
/// other host is reachable through this service.
#[derive(Clone, Debug)]
pub struct ForwardService {
    http: reqwest::Client,
    api_base: String,
}

impl ForwardService {
    /// Builds the service with a client bound to the configured request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, api_base: config.api_base.trim_end_matches('/').to_string() })
    }

    /// Forwards a validated message to the destination webhook and maps the
    /// outcome. Exactly one outbound call per invocation; no retries.
    ///
    /// # Errors
    /// Returns `AppError::Upstream` if the upstream answers with anything but 204.
    /// Returns `AppError::UpstreamUnreachable` if the call cannot complete.
    #[tracing::instrument(
        err(level = "warn"),
        skip(self, webhook_id, webhook_token, message),
        fields(webhook_id = %webhook_id)
    )]
    pub async fn forward(
        &self,
        webhook_id: &str,
        webhook_token: &str,
        message: &WebhookMessage,
    ) -> Result<()> {
        let url = format!("{}/{webhook_id}/{webhook_token}", self.api_base);

        let response = self.http.post(&url).json(message).send().await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            tracing::debug!("Upstream accepted the message");
            return Ok(());
        }

        let body = response.text().await?;
        Err(AppError::Upstream { status: status.as_u16(), body })
    }
}
