//! Lumen settings - reactive, persisted user settings for the Lumen chat client.
//!
//! This crate holds every user-configurable preference of the client (UI
//! behavior, third-party API credentials, model/voice/image-generation
//! parameters) as a single typed record. The main features include:
//!
//! - One-shot hydration from durable storage with legacy-key migration and
//!   environment-derived defaults
//! - Field-level setters that persist the full snapshot on every change
//! - Change notifications that UI components can subscribe to
//! - Graceful degradation to in-memory-only operation when no durable
//!   storage is available
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lumen_settings::SettingsStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Hydrate from the on-disk snapshot (or defaults on first run)
//!     let store = SettingsStore::hydrate_default();
//!
//!     // Read and mutate individual fields
//!     println!("language: {}", store.current().preferred_language);
//!     store.set_render_markdown(true);
//! }
//! ```

/// Core error types and result aliases.
pub mod core;

/// Tracing subscriber setup for host applications.
pub mod logging;

/// Durable persistence of the settings snapshot.
pub mod persistence;

/// Settings record schema and default resolution.
pub mod settings;

/// Reactive settings store with change notifications.
pub mod store;

/// Re-exported core types for convenience.
pub use crate::core::{Result, SettingsError};
pub use crate::settings::SettingsRecord;
pub use crate::store::SettingsStore;
