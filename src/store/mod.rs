pub mod config;
pub mod content_store;

pub use config::StoreConfig;
pub use content_store::{ContentStore, ContentUpdate};
