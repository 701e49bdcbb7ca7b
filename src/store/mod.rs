//! Reactive settings store with change notifications.
//!
//! Composes the settings record, the persistence adapter, and a broadcast
//! service into the single store instance the client hydrates at startup.
//! Setters mutate one field at a time, persist the full snapshot, and notify
//! subscribers of the change.

mod broadcast;
mod changes;
mod store;

#[cfg(test)]
mod tests;

pub use broadcast::{BroadcastService, Subscription};
pub use changes::SettingChange;
pub use store::SettingsStore;
