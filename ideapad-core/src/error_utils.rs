use crate::error::*;
use tracing::{error, warn};

/// Helpers the GUI layer uses to turn errors into log lines and
/// user-visible notifications. No failure here is fatal; everything is
/// recovered at the user action that triggered it.
pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Webhook(e) => {
                error!("Webhook error details: {:?}", e);
            }
            CoreError::Storage(e) => {
                error!("Storage error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Validation(e) => e.user_friendly_message(),
            CoreError::Webhook(e) => e.user_friendly_message(),
            CoreError::Storage(e) => e.user_friendly_message(),
            CoreError::Configuration { message } => {
                format!("Configuration problem: {}", message)
            }
            CoreError::Io(_) => "Could not access local storage.".to_string(),
            CoreError::Serialization(_) => {
                "Stored data could not be read. It may be corrupt.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Validation(_) => "VALIDATION".to_string(),
            CoreError::Webhook(_) => "WEBHOOK".to_string(),
            CoreError::Storage(_) => "STORAGE".to_string(),
            CoreError::Configuration { .. } => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
        }
    }
}

impl ErrorExt for ValidationError {
    fn log_error(&self) -> &Self {
        error!("ValidationError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ValidationError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ValidationError::EmptyDraftText => {
                "Please write some draft text before saving.".to_string()
            }
            ValidationError::MissingProfile => "Please select a profile.".to_string(),
            ValidationError::EmptyCredential => {
                "Please enter your Make.com API key.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ValidationError::EmptyDraftText => "EMPTY_DRAFT".to_string(),
            ValidationError::MissingProfile => "MISSING_PROFILE".to_string(),
            ValidationError::EmptyCredential => "EMPTY_CREDENTIAL".to_string(),
        }
    }
}

impl ErrorExt for WebhookError {
    fn log_error(&self) -> &Self {
        error!("WebhookError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("WebhookError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            WebhookError::UrlNotConfigured => {
                "Webhook not configured. Set your Make.com webhook URL in settings.".to_string()
            }
            WebhookError::InvalidUrl { url } => {
                format!("The webhook URL is not valid: {}", url)
            }
            WebhookError::Unauthorized => {
                "The webhook rejected your API key. Check it in settings.".to_string()
            }
            WebhookError::Server { status_code } => {
                format!("The webhook returned an error (HTTP {}).", status_code)
            }
            WebhookError::Network { .. } => {
                "Could not reach the webhook. Check your connection and the URL.".to_string()
            }
            WebhookError::InvalidResponse { .. } => {
                "The webhook sent back a response that could not be read.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            WebhookError::UrlNotConfigured => "WEBHOOK_URL_NOT_CONFIGURED".to_string(),
            WebhookError::InvalidUrl { .. } => "WEBHOOK_URL_INVALID".to_string(),
            WebhookError::Unauthorized => "WEBHOOK_UNAUTHORIZED".to_string(),
            WebhookError::Server { .. } => "WEBHOOK_SERVER_ERROR".to_string(),
            WebhookError::Network { .. } => "WEBHOOK_NETWORK_ERROR".to_string(),
            WebhookError::InvalidResponse { .. } => "WEBHOOK_INVALID_RESPONSE".to_string(),
        }
    }
}

impl ErrorExt for StorageError {
    fn log_error(&self) -> &Self {
        error!("StorageError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("StorageError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            StorageError::ReadFailed { key, .. } => {
                format!("Could not load saved data ({}).", key)
            }
            StorageError::WriteFailed { key, .. } => {
                format!("Could not save data ({}).", key)
            }
            StorageError::Corrupt { key, .. } => {
                format!("Saved data for {} is corrupt.", key)
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            StorageError::ReadFailed { .. } => "STORAGE_READ".to_string(),
            StorageError::WriteFailed { .. } => "STORAGE_WRITE".to_string(),
            StorageError::Corrupt { .. } => "STORAGE_CORRUPT".to_string(),
        }
    }
}
