//! Durable persistence of the settings snapshot.
//!
//! Storage is modeled as a string key/value medium behind the
//! [`StorageMedium`] trait, mirroring the browser-storage origins of the
//! snapshot format. The [`PersistenceAdapter`] is the only component that
//! touches the medium; everything above it deals in typed records.

mod adapter;
mod file;
mod medium;
mod memory;
mod paths;

#[cfg(test)]
mod tests;

pub use adapter::{LEGACY_API_KEY_KEY, PersistenceAdapter, SCHEMA_VERSION, SETTINGS_KEY};
pub use file::FileMedium;
pub use medium::StorageMedium;
pub use memory::MemoryMedium;
pub use paths::StorePaths;
