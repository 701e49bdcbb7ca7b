use crate::core::Result;

/// A durable string key/value medium.
///
/// This is the seam between the settings store and whatever actually holds
/// the bytes. Reads never fail - a missing or unreadable key is simply
/// absent. Writes report failure so the adapter can log it, but no caller
/// above the adapter ever sees the error.
pub trait StorageMedium: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    /// Returns `SettingsError::PersistenceError` if the value cannot be
    /// durably written.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
