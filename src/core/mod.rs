use serde_json::Value;
use thiserror::Error;

/// Error types for the settings crate.
///
/// These errors are internal plumbing: the public store surface absorbs every
/// failure into a default, a coercion, or a logged warning, so none of them
/// escape a setter or a read. They are still carried as typed values so the
/// persistence and broadcast layers can report what went wrong.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Error occurred while serializing or deserializing settings data
    #[error("failed to serialize {content_type}: {details}")]
    SerializationError {
        /// Type of content being serialized (e.g., "settings snapshot")
        content_type: String,
        /// Serialization error details
        details: String,
    },

    /// Error occurred while writing to the durable medium
    #[error("failed to persist '{key}': {details}")]
    PersistenceError {
        /// Storage key where persistence failed
        key: String,
        /// Error details from the persistence operation
        details: String,
    },

    /// A change payload could not be read as the requested type
    #[error("type mismatch for field {field}: expected {expected_type}, got {actual_value:?}")]
    TypeMismatch {
        /// The field whose value was extracted.
        field: String,
        /// The expected type name.
        expected_type: &'static str,
        /// The actual value that was provided.
        actual_value: Value,
    },

    /// A required service is unavailable
    #[error("{service} service unavailable: {details}")]
    ServiceUnavailable {
        /// Name of the service that is unavailable
        service: String,
        /// Details about why the service is unavailable
        details: String,
    },
}

/// A specialized `Result` type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
