use ideapad_core::{CoreError, ValidationError};
use storage::SettingsStore;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// Gates the rest of the application behind presence of the persisted
/// credential. While locked, the GUI renders only the credential prompt,
/// so no other component's mutating operations are reachable.
pub struct AccessGate {
    settings: SettingsStore,
    state: GateState,
    credential: Option<String>,
}

impl AccessGate {
    /// Initial state is determined by whether a credential is persisted.
    pub fn load(settings: SettingsStore) -> Result<Self, CoreError> {
        let credential = settings.credential()?;
        let state = if credential.is_some() {
            GateState::Unlocked
        } else {
            GateState::Locked
        };
        Ok(Self {
            settings,
            state,
            credential,
        })
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// The in-memory credential, present only while unlocked.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Locked → Unlocked. Persists the trimmed credential first; an
    /// empty or whitespace submission is rejected without a transition.
    pub fn unlock(&mut self, submitted: &str) -> Result<(), CoreError> {
        let trimmed = submitted.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCredential.into());
        }
        self.settings.set_credential(trimmed)?;
        self.credential = Some(trimmed.to_string());
        self.state = GateState::Unlocked;
        info!("Access gate unlocked");
        Ok(())
    }

    /// Unlocked → Locked: the "change credential" action. Erases the
    /// persisted value.
    pub fn lock(&mut self) -> Result<(), CoreError> {
        self.settings.clear_credential()?;
        self.credential = None;
        self.state = GateState::Locked;
        info!("Access gate locked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::MemoryStore;

    fn settings() -> SettingsStore {
        SettingsStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_starts_locked_without_a_persisted_credential() {
        let gate = AccessGate::load(settings()).expect("load gate");
        assert_eq!(gate.state(), GateState::Locked);
        assert_eq!(gate.credential(), None);
    }

    #[test]
    fn test_starts_unlocked_with_a_persisted_credential() {
        let settings = settings();
        settings.set_credential("existing-key").expect("seed credential");

        let gate = AccessGate::load(settings).expect("load gate");
        assert_eq!(gate.state(), GateState::Unlocked);
        assert_eq!(gate.credential(), Some("existing-key"));
    }

    #[test]
    fn test_unlock_persists_the_trimmed_credential() {
        let settings = settings();
        let mut gate = AccessGate::load(settings.clone()).expect("load gate");

        gate.unlock("  secret-key  ").expect("unlock");
        assert!(gate.is_unlocked());
        assert_eq!(gate.credential(), Some("secret-key"));
        assert_eq!(
            settings.credential().expect("read credential"),
            Some("secret-key".to_string())
        );
    }

    #[test]
    fn test_unlock_rejects_whitespace_submissions() {
        let mut gate = AccessGate::load(settings()).expect("load gate");

        match gate.unlock("   ") {
            Err(CoreError::Validation(ValidationError::EmptyCredential)) => {}
            other => panic!("expected EmptyCredential, got {:?}", other),
        }
        assert_eq!(gate.state(), GateState::Locked);
    }

    #[test]
    fn test_lock_erases_the_persisted_credential() {
        let settings = settings();
        let mut gate = AccessGate::load(settings.clone()).expect("load gate");
        gate.unlock("secret-key").expect("unlock");

        gate.lock().expect("lock");
        assert_eq!(gate.state(), GateState::Locked);
        assert_eq!(gate.credential(), None);
        assert_eq!(settings.credential().expect("read credential"), None);
    }
}
