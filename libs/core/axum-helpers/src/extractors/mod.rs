//! Request extractors that reject early with structured error bodies,
//! so handlers only run against well-formed input.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
