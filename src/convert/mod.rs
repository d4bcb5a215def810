pub mod contract;
pub mod json;

pub use contract::{ConvertError, FormatConverter};
pub use json::JsonConverter;
