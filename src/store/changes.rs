use std::time::Instant;

use serde_json::Value;

use crate::core::SettingsError;

/// Represents a single settings mutation.
///
/// Captures which field changed and its value before and after, using the
/// serialized (camelCase) field names that also appear in the persisted
/// snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingChange {
    /// Serialized name of the changed field (e.g., "centerMode").
    pub field: String,
    /// The previous value of the field, if available.
    pub old_value: Option<Value>,
    /// The new value of the field.
    pub new_value: Value,
    /// Timestamp when the change occurred.
    pub timestamp: Instant,
}

impl SettingChange {
    /// Creates a new settings change.
    ///
    /// # Arguments
    ///
    /// * `field` - The serialized name of the changed field
    /// * `old_value` - The previous value of the field (if known)
    /// * `new_value` - The new value of the field
    pub fn new(field: String, old_value: Option<Value>, new_value: Value) -> Self {
        Self {
            field,
            old_value,
            new_value,
            timestamp: Instant::now(),
        }
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::TypeMismatch` if the value cannot be
    /// deserialized into the requested type.
    pub fn extract<T>(&self) -> Result<T, SettingsError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.new_value.clone()).map_err(|_| SettingsError::TypeMismatch {
            field: self.field.clone(),
            expected_type: std::any::type_name::<T>(),
            actual_value: self.new_value.clone(),
        })
    }

    /// Attempts to extract the new value as a string.
    ///
    /// Returns `None` if the value is not a string.
    pub fn as_string(&self) -> Option<String> {
        match &self.new_value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Extracts the new value as a string with a fallback default.
    pub fn as_string_or(&self, default: &str) -> String {
        self.as_string().unwrap_or_else(|| default.to_string())
    }
}
