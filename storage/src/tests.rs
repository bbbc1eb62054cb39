use crate::{
    FileStore, IdeaRepository, KeyValueStore, MemoryStore, SettingsStore, DEFAULT_POPULATE_URL,
    DEFAULT_WEBHOOK_URL, IDEAS_KEY,
};
use ideapad_core::{CoreError, IdeaDraft, ValidationError};
use std::sync::Arc;

fn draft(text: &str) -> IdeaDraft {
    IdeaDraft {
        draft_text: text.to_string(),
        profile: "Default".to_string(),
        ..IdeaDraft::default()
    }
}

fn memory_repo() -> (Arc<MemoryStore>, IdeaRepository) {
    let store = Arc::new(MemoryStore::new());
    let repo = IdeaRepository::load(store.clone()).expect("load empty repository");
    (store, repo)
}

#[test]
fn test_add_prepends_newest_first() {
    let (_store, mut repo) = memory_repo();

    let first = repo.add(&draft("first idea")).expect("add first");
    let second = repo.add(&draft("second idea")).expect("add second");

    let ids: Vec<&str> = repo.list().iter().map(|idea| idea.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_remove_deletes_and_ignores_unknown_ids() {
    let (_store, mut repo) = memory_repo();

    let kept = repo.add(&draft("kept")).expect("add");
    let removed = repo.add(&draft("removed")).expect("add");

    repo.remove(&removed.id).expect("remove existing");
    assert_eq!(repo.list().len(), 1);
    assert_eq!(repo.list()[0].id, kept.id);

    // Removing a nonexistent id is a silent no-op.
    repo.remove("no-such-id").expect("remove unknown");
    assert_eq!(repo.list().len(), 1);
}

#[test]
fn test_add_rejects_blank_draft_text_without_mutating_storage() {
    let (store, mut repo) = memory_repo();

    let result = repo.add(&draft("   \n\t "));
    match result {
        Err(CoreError::Validation(ValidationError::EmptyDraftText)) => {}
        other => panic!("expected EmptyDraftText, got {:?}", other.map(|r| r.id)),
    }

    assert!(repo.list().is_empty());
    assert_eq!(store.get(IDEAS_KEY).expect("read ideas"), None);
}

#[test]
fn test_add_rejects_missing_profile() {
    let (_store, mut repo) = memory_repo();

    let mut no_profile = draft("some text");
    no_profile.profile.clear();

    match repo.add(&no_profile) {
        Err(CoreError::Validation(ValidationError::MissingProfile)) => {}
        other => panic!("expected MissingProfile, got {:?}", other.map(|r| r.id)),
    }
}

#[test]
fn test_collection_round_trips_through_the_store() {
    let store = Arc::new(MemoryStore::new());
    let mut repo = IdeaRepository::load(store.clone()).expect("load");

    let mut full = draft("round trip");
    full.profile = "Client Outreach".to_string();
    full.segment = "SaaS".to_string();
    full.target_audience = "Founders".to_string();
    full.theme = "Case Study".to_string();
    full.keywords = "launch, beta".to_string();
    let created = repo.add(&full).expect("add");
    repo.add(&draft("second")).expect("add");

    let reloaded = IdeaRepository::load(store).expect("reload");
    assert_eq!(reloaded.list(), repo.list());

    let found = reloaded.find(&created.id).expect("find reloaded record");
    assert_eq!(found.created_at, created.created_at);
    assert_eq!(found.segment, "SaaS");
    assert_eq!(found.keywords, "launch, beta");
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = FileStore::new(dir.path()).expect("create file store");

    assert_eq!(store.get("missing").expect("get missing"), None);

    store.set("make-webhook-url", "https://example.test/hook").expect("set");
    assert_eq!(
        store.get("make-webhook-url").expect("get"),
        Some("https://example.test/hook".to_string())
    );

    store.remove("make-webhook-url").expect("remove");
    assert_eq!(store.get("make-webhook-url").expect("get removed"), None);

    // Removing an absent key is not an error.
    store.remove("make-webhook-url").expect("remove again");
}

#[test]
fn test_repository_persists_across_file_store_instances() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let created = {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileStore::new(dir.path()).expect("create store"));
        let mut repo = IdeaRepository::load(store).expect("load");
        repo.add(&draft("persisted idea")).expect("add")
    };

    let store: Arc<dyn KeyValueStore> =
        Arc::new(FileStore::new(dir.path()).expect("reopen store"));
    let repo = IdeaRepository::load(store).expect("reload");
    assert_eq!(repo.list().len(), 1);
    assert_eq!(repo.list()[0], created);
}

#[test]
fn test_settings_defaults_and_overrides() {
    let settings = SettingsStore::new(Arc::new(MemoryStore::new()));

    assert_eq!(settings.webhook_url().expect("url"), DEFAULT_WEBHOOK_URL);
    assert_eq!(settings.populate_url().expect("url"), DEFAULT_POPULATE_URL);

    settings
        .set_webhook_url("https://example.test/hook")
        .expect("set url");
    assert_eq!(
        settings.webhook_url().expect("url"),
        "https://example.test/hook"
    );
}

#[test]
fn test_credential_lifecycle() {
    let settings = SettingsStore::new(Arc::new(MemoryStore::new()));

    assert_eq!(settings.credential().expect("credential"), None);

    match settings.set_credential("   ") {
        Err(CoreError::Validation(ValidationError::EmptyCredential)) => {}
        other => panic!("expected EmptyCredential, got {:?}", other),
    }

    settings.set_credential("  secret-key  ").expect("set credential");
    assert_eq!(
        settings.credential().expect("credential"),
        Some("secret-key".to_string())
    );

    settings.clear_credential().expect("clear credential");
    assert_eq!(settings.credential().expect("credential"), None);
}
