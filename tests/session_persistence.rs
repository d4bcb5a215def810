use content_core::session::{
    Environment, MemoryStorage, SavedSession, SessionPersistence, SessionStorage,
    StandaloneEnvironment, StorageUnavailable, CONTENT_KEY, FORMAT_KEY,
};
use content_core::types::FormatTag;

struct FixedEnvironment {
    embedded: bool,
    query: bool,
}

impl Environment for FixedEnvironment {
    fn is_embedded_frame(&self) -> bool {
        self.embedded
    }

    fn has_query_params(&self) -> bool {
        self.query
    }
}

struct FailingStorage;

impl SessionStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageUnavailable> {
        Err(StorageUnavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageUnavailable> {
        Err(StorageUnavailable)
    }
}

fn standalone(storage: Box<dyn SessionStorage>) -> SessionPersistence {
    SessionPersistence::new(storage, Box::new(StandaloneEnvironment))
}

#[test]
fn invariant_save_restore_round_trip() {
    let mut session = standalone(Box::new(MemoryStorage::new()));

    session.save("{\"a\":1}", FormatTag::Json);

    assert_eq!(
        session.restore(),
        Some(SavedSession {
            text: "{\"a\":1}".to_string(),
            format: FormatTag::Json,
        })
    );
}

#[test]
fn invariant_oversize_content_not_saved() {
    let mut session = standalone(Box::new(MemoryStorage::new())).with_limit(10);

    session.save("0123456789", FormatTag::Json); // exactly at the limit
    assert!(session.restore().is_none());

    session.save("012345678", FormatTag::Json); // one under
    assert!(session.restore().is_some());
}

#[test]
fn invariant_embedded_frame_suppresses_save() {
    let env = FixedEnvironment {
        embedded: true,
        query: false,
    };
    let mut session = SessionPersistence::new(Box::new(MemoryStorage::new()), Box::new(env));

    session.save("{}", FormatTag::Json);
    assert!(session.restore().is_none());
}

#[test]
fn invariant_query_driven_load_suppresses_save() {
    let env = FixedEnvironment {
        embedded: false,
        query: true,
    };
    let mut session = SessionPersistence::new(Box::new(MemoryStorage::new()), Box::new(env));

    session.save("{}", FormatTag::Json);
    assert!(session.restore().is_none());
}

#[test]
fn invariant_storage_failures_are_absorbed() {
    let mut session = standalone(Box::new(FailingStorage));

    // Neither direction may panic or surface the failure
    session.save("{}", FormatTag::Json);
    assert!(session.restore().is_none());
}

#[test]
fn invariant_unknown_saved_format_invalidates_pair() {
    let mut storage = MemoryStorage::new();
    storage.set(CONTENT_KEY, "{}").unwrap();
    storage.set(FORMAT_KEY, "markdown").unwrap();

    let session = standalone(Box::new(storage));
    assert!(session.restore().is_none());
}

#[test]
fn invariant_partial_pair_is_no_saved_state() {
    let mut storage = MemoryStorage::new();
    storage.set(CONTENT_KEY, "{}").unwrap();

    let session = standalone(Box::new(storage));
    assert!(session.restore().is_none());
}

#[test]
fn golden_saved_format_uses_string_form() {
    let mut storage = MemoryStorage::new();
    storage.set(CONTENT_KEY, "a: 1").unwrap();
    storage.set(FORMAT_KEY, "yaml").unwrap();

    let session = standalone(Box::new(storage));
    let saved = session.restore().unwrap();
    assert_eq!(saved.format, FormatTag::Yaml);
    assert_eq!(saved.text, "a: 1");
}
