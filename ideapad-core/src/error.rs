use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Draft text is empty")]
    EmptyDraftText,

    #[error("No profile selected")]
    MissingProfile,

    #[error("Credential is empty")]
    EmptyCredential,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Webhook URL is not configured")]
    UrlNotConfigured,

    #[error("Invalid webhook URL: {url}")]
    InvalidUrl { url: String },

    #[error("Webhook rejected the credential")]
    Unauthorized,

    #[error("Webhook server error: {status_code}")]
    Server { status_code: u16 },

    #[error("Network error: {reason}")]
    Network { reason: String },

    #[error("Invalid webhook response: {details}")]
    InvalidResponse { details: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to read entry {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write entry {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Corrupt entry {key}: {details}")]
    Corrupt { key: String, details: String },
}
