use crate::api::schemas::presence::Maybe;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A webhook message in the shape Discord's webhook API accepts.
///
/// Every field is tri-state (see [`Maybe`]): keys absent from the inbound
/// request stay unset and are omitted when the message is re-serialized for
/// the upstream call, so the outbound payload carries exactly the keys the
/// caller sent. Unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub content: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub username: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub avatar_url: Maybe<Url>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub embeds: Maybe<Vec<Embed>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub tts: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub allowed_mentions: Maybe<AllowedMentions>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub attachments: Maybe<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub flags: Maybe<u64>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub components: Maybe<Vec<serde_json::Map<String, serde_json::Value>>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub sticker_ids: Maybe<Vec<u64>>,
}

impl WebhookMessage {
    /// Validates raw request bytes against the webhook message schema.
    ///
    /// # Errors
    /// Returns `AppError::Validation` naming the offending field path and the
    /// expected shape when the body is not valid JSON or a field violates the
    /// schema.
    pub fn from_json(bytes: &[u8]) -> crate::error::Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            let path = e.path().to_string();
            AppError::Validation(format!("{path}: {}", e.into_inner()))
        })
    }
}

/// Rich-content block attachable to a message. All fields optional; the
/// upstream service enforces its own embed-count and length limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub title: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub url: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub color: Maybe<u32>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub author: Maybe<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub fields: Maybe<Vec<EmbedField>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub footer: Maybe<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub image: Maybe<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub thumbnail: Maybe<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub video: Maybe<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub provider: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub timestamp: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub icon_url: Maybe<Url>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub value: Maybe<FieldValue>,
}

/// Embed field values accept strings or integers, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub text: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub icon_url: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedMedia {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub url: Maybe<Url>,
}

/// Policy restricting which mention types in the message actually ping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowedMentions {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub parse: Maybe<Vec<MentionParse>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub users: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub roles: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub replied_user: Maybe<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionParse {
    Roles,
    Users,
    Everyone,
}

/// Reference to a file being sent. `filename` is mandatory whenever an
/// attachment object is present at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub id: Maybe<u64>,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub content_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub size: Maybe<u64>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub url: Maybe<Url>,
}

/// Fixed success payload returned when the upstream accepts a message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ForwardResponse {
    pub status: String,
}

impl ForwardResponse {
    #[must_use]
    pub fn success() -> Self {
        Self { status: "success".to_string() }
    }
}
