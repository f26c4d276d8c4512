//! Custom extractors for common request inputs.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::{validation_message, ValidatedJson};
