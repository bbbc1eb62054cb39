use crate::KeyValueStore;
use ideapad_core::{CoreError, ValidationError};
use std::sync::Arc;
use tracing::info;

pub const WEBHOOK_URL_KEY: &str = "make-webhook-url";
pub const POPULATE_URL_KEY: &str = "make-populate-url";
pub const CREDENTIAL_KEY: &str = "make-api-key";

/// Built-in endpoints used until the user configures their own.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://hook.eu2.make.com/q2v8d5xk3jw1r9m7c4t6y0pb8nh5fsl2";
pub const DEFAULT_POPULATE_URL: &str =
    "https://hook.eu2.make.com/t6y0pb8nh5fsl2q2v8d5xk3jw1r9m7c4";

/// Process-wide mutable settings behind the injected persistence boundary.
/// Values are read fresh on every use; the webhook client never caches
/// them.
#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn webhook_url(&self) -> Result<String, CoreError> {
        Ok(self
            .store
            .get(WEBHOOK_URL_KEY)?
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string()))
    }

    /// Saved as typed, including partial input; the webhook client
    /// validates before sending.
    pub fn set_webhook_url(&self, url: &str) -> Result<(), CoreError> {
        self.store.set(WEBHOOK_URL_KEY, url)
    }

    pub fn populate_url(&self) -> Result<String, CoreError> {
        Ok(self
            .store
            .get(POPULATE_URL_KEY)?
            .unwrap_or_else(|| DEFAULT_POPULATE_URL.to_string()))
    }

    pub fn set_populate_url(&self, url: &str) -> Result<(), CoreError> {
        self.store.set(POPULATE_URL_KEY, url)
    }

    pub fn credential(&self) -> Result<Option<String>, CoreError> {
        self.store.get(CREDENTIAL_KEY)
    }

    pub fn set_credential(&self, value: &str) -> Result<(), CoreError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCredential.into());
        }
        self.store.set(CREDENTIAL_KEY, trimmed)?;
        info!("Credential updated");
        Ok(())
    }

    pub fn clear_credential(&self) -> Result<(), CoreError> {
        self.store.remove(CREDENTIAL_KEY)?;
        info!("Credential cleared");
        Ok(())
    }
}
