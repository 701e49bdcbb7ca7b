use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::settings::SettingsRecord;

use super::{FileMedium, medium::StorageMedium};

/// Storage key holding the unified settings snapshot.
pub const SETTINGS_KEY: &str = "lumen-settings";

/// Deprecated standalone key holding only the OpenAI API key.
///
/// Predates the unified snapshot. Read during hydration, never written or
/// deleted; once the unified snapshot has been saved it is dead weight.
pub const LEGACY_API_KEY_KEY: &str = "lumen-settings-openai-api-key";

/// Version number written into every persisted snapshot.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk envelope around the settings record.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSnapshot {
    state: SettingsRecord,
    version: u32,
}

/// Boundary component for all reads and writes of the durable medium.
///
/// Holds the medium as an option: when no durable storage exists in the
/// current execution context the adapter reports every load as absent and
/// turns every save into a no-op, and the store runs purely in memory.
/// No failure of the medium is ever surfaced to callers - malformed or
/// unreadable data is treated identically to "absent".
pub struct PersistenceAdapter {
    medium: Option<Box<dyn StorageMedium>>,
}

impl PersistenceAdapter {
    /// Creates an adapter over an optional medium.
    pub fn new(medium: Option<Box<dyn StorageMedium>>) -> Self {
        Self { medium }
    }

    /// Creates an adapter over a concrete medium.
    pub fn with_medium(medium: impl StorageMedium + 'static) -> Self {
        Self::new(Some(Box::new(medium)))
    }

    /// Creates an adapter over the standard file medium, degrading to
    /// in-memory-only operation when none can be located.
    pub fn discover() -> Self {
        Self::new(
            FileMedium::discover().map(|medium| Box::new(medium) as Box<dyn StorageMedium>),
        )
    }

    /// Attempts to read and deserialize the persisted snapshot.
    ///
    /// Returns `None` when the medium is unavailable, the key is missing, or
    /// the content does not deserialize. A corrupt snapshot is never
    /// partially merged; it collapses to absent and the caller re-applies
    /// defaults.
    pub fn load(&self) -> Option<SettingsRecord> {
        let raw = self.medium.as_ref()?.read(SETTINGS_KEY)?;

        match serde_json::from_str::<PersistedSnapshot>(&raw) {
            Ok(snapshot) => Some(snapshot.state),
            Err(e) => {
                warn!("discarding malformed settings snapshot: {e}");
                None
            }
        }
    }

    /// Serializes the full record and overwrites the persisted snapshot.
    ///
    /// Best effort: failures are logged and absorbed, and with no medium
    /// this is a no-op. The caller's in-memory state is authoritative either
    /// way.
    pub fn save(&self, record: &SettingsRecord) {
        let Some(medium) = self.medium.as_ref() else {
            debug!("no durable medium, skipping settings save");
            return;
        };

        let snapshot = PersistedSnapshot {
            state: record.clone(),
            version: SCHEMA_VERSION,
        };

        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to serialize settings snapshot: {e}");
                return;
            }
        };

        if let Err(e) = medium.write(SETTINGS_KEY, &raw) {
            warn!("failed to persist settings snapshot: {e}");
        }
    }

    /// Reads the API key from the deprecated standalone key, if present.
    ///
    /// Read-only by contract: repeated cold starts before the first unified
    /// save will re-read the same value.
    pub fn read_legacy_api_key(&self) -> Option<String> {
        self.medium.as_ref()?.read(LEGACY_API_KEY_KEY)
    }
}
