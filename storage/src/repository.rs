use crate::KeyValueStore;
use chrono::Utc;
use ideapad_core::{CoreError, IdeaDraft, IdeaRecord, StorageError, ValidationError};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Storage key holding the full idea collection as a JSON array.
pub const IDEAS_KEY: &str = "linkedin-ideas";

/// Append/delete/list over the persisted idea collection,
/// most-recent-first. Records are immutable once created; every mutation
/// rewrites the whole persisted array.
pub struct IdeaRepository {
    store: Arc<dyn KeyValueStore>,
    ideas: Vec<IdeaRecord>,
}

impl IdeaRepository {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self, CoreError> {
        let ideas: Vec<IdeaRecord> = match store.get(IDEAS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                CoreError::Storage(StorageError::Corrupt {
                    key: IDEAS_KEY.to_string(),
                    details: e.to_string(),
                })
            })?,
            None => Vec::new(),
        };
        debug!("Loaded {} stored ideas", ideas.len());
        Ok(Self { store, ideas })
    }

    /// Validates the draft, assigns identity and creation time, prepends
    /// the record and persists the collection. Persistence happens here,
    /// before any webhook attempt the caller may make.
    pub fn add(&mut self, draft: &IdeaDraft) -> Result<IdeaRecord, CoreError> {
        if draft.draft_text.trim().is_empty() {
            return Err(ValidationError::EmptyDraftText.into());
        }
        if draft.profile.trim().is_empty() {
            return Err(ValidationError::MissingProfile.into());
        }

        let record = IdeaRecord {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            draft_text: draft.draft_text.clone(),
            profile: draft.profile.clone(),
            post_goal: draft.post_goal.clone(),
            tone: draft.tone.clone(),
            target_audience: draft.target_audience.clone(),
            segment: draft.segment.clone(),
            theme: draft.theme.clone(),
            preferred_format: draft.preferred_format.clone(),
            keywords: draft.keywords.clone(),
            notes: draft.notes.clone(),
        };

        self.ideas.insert(0, record.clone());
        self.persist()?;
        info!("Saved idea {}", record.id);
        Ok(record)
    }

    /// Removes the record with the given id. Silent no-op when absent.
    pub fn remove(&mut self, id: &str) -> Result<(), CoreError> {
        let before = self.ideas.len();
        self.ideas.retain(|idea| idea.id != id);
        if self.ideas.len() == before {
            debug!("No stored idea with id {}", id);
            return Ok(());
        }
        self.persist()?;
        info!("Deleted idea {}", id);
        Ok(())
    }

    /// Full collection, most-recent-first. Order is stable until the next
    /// mutation.
    pub fn list(&self) -> &[IdeaRecord] {
        &self.ideas
    }

    pub fn find(&self, id: &str) -> Option<&IdeaRecord> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    fn persist(&self) -> Result<(), CoreError> {
        let raw = serde_json::to_string(&self.ideas)?;
        self.store.set(IDEAS_KEY, &raw)
    }
}
