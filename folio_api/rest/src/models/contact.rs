use folio_models::contact::{ContactPayload, MessageContent, RelayResult, SenderEmail, SenderName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the sender
    pub name: SenderName,
    /// Email address of the sender
    pub email: SenderEmail,
    /// Content of the message
    pub message: MessageContent,
}

impl From<ApiContactMessage> for ContactPayload {
    fn from(value: ApiContactMessage) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiRelayResult {
    pub success: bool,
    pub message: String,
}

impl From<RelayResult> for ApiRelayResult {
    fn from(value: RelayResult) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}
