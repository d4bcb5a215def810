pub mod persistence;
pub mod storage;

pub use persistence::{
    Environment, SavedSession, SessionPersistence, StandaloneEnvironment, CONTENT_KEY, FORMAT_KEY,
    PERSIST_LIMIT,
};
pub use storage::{MemoryStorage, SessionStorage, StorageUnavailable};
