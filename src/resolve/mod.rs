pub mod classify;
pub mod resolver;

pub use classify::{classify, Classified};
pub use resolver::{FetchError, Fetcher, Notifier, SourceResolver, StartupInput};
