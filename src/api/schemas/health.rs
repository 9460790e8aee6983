use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProxyStatus {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookInfo {
    pub status: String,
    pub message: String,
    pub webhook_id: String,
}
