use std::{
    collections::HashMap,
    sync::RwLock,
};

use crate::core::Result;

use super::medium::StorageMedium;

/// In-memory storage medium.
///
/// Backs the store in tests and in contexts where durable storage exists
/// conceptually but should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryMedium {
    /// Creates an empty in-memory medium.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> Option<String> {
        let entries = match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
