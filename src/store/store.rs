use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::core::Result;
use crate::persistence::PersistenceAdapter;
use crate::settings::{
    AutoSpeak, CenterMode, SettingsRecord, ZenMode, coerce_seed, system_locale,
};

use super::{
    broadcast::{BroadcastService, Subscription},
    changes::SettingChange,
};

/// Thread-safe storage for the settings record
type SharedRecord = Arc<RwLock<SettingsRecord>>;

/// The process-wide settings store.
///
/// Explicitly constructed once at startup by [`SettingsStore::hydrate`] and
/// handed to whatever consumes it; there is no ambient global. Cloning is
/// cheap and every clone observes the same record.
///
/// Setters are infallible: the in-memory value is updated immediately and is
/// authoritative, the durable snapshot is written best-effort, and the
/// change is broadcast to subscribers without blocking the caller.
#[derive(Clone)]
pub struct SettingsStore {
    record: SharedRecord,
    adapter: Arc<PersistenceAdapter>,
    broadcast_service: BroadcastService,
}

impl SettingsStore {
    /// Hydrates a store from the persisted snapshot.
    ///
    /// On a snapshot hit the persisted record seeds the store as-is. On a
    /// miss (absent medium, missing key, malformed content) defaults are
    /// resolved per field: the API key falls back to the legacy standalone
    /// storage key, the UI language falls back to the environment locale,
    /// and everything else takes its static default.
    ///
    /// Must be called from within a tokio runtime; the change-broadcast
    /// actor is spawned here.
    #[instrument(skip(adapter))]
    pub fn hydrate(adapter: PersistenceAdapter) -> Self {
        let record = match adapter.load() {
            Some(record) => {
                debug!("hydrated settings from persisted snapshot");
                record
            }
            None => {
                let legacy_api_key = adapter.read_legacy_api_key();
                if legacy_api_key.is_some() {
                    info!("adopting API key from legacy storage key");
                }
                SettingsRecord::initial(system_locale(), legacy_api_key)
            }
        };

        Self {
            record: Arc::new(RwLock::new(record)),
            adapter: Arc::new(adapter),
            broadcast_service: BroadcastService::new(),
        }
    }

    /// Hydrates a store over the standard on-disk medium.
    ///
    /// Degrades to in-memory-only operation when no settings directory can
    /// be determined for the current execution context.
    pub fn hydrate_default() -> Self {
        Self::hydrate(PersistenceAdapter::discover())
    }

    /// Returns a clone of the current record, handling poisoned locks gracefully
    pub fn current(&self) -> SettingsRecord {
        match self.record.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Retrieves a single field by its serialized (camelCase) name.
    ///
    /// Returns `None` for unknown field names.
    pub fn get_field(&self, field: &str) -> Option<Value> {
        match serde_json::to_value(self.current()) {
            Ok(Value::Object(map)) => map.get(field).cloned(),
            _ => None,
        }
    }

    /// Subscribe to settings changes matching the specified field pattern.
    ///
    /// `"*"` matches every field; any other pattern matches one field by its
    /// serialized name. Events are filtered at the source.
    ///
    /// # Errors
    /// Returns `SettingsError::ServiceUnavailable` if the broadcast service
    /// is unavailable.
    pub async fn subscribe(&self, pattern: &str) -> Result<Subscription> {
        self.broadcast_service.subscribe(pattern).await
    }

    /// Replaces exactly one field, persists the full snapshot, and
    /// broadcasts the change.
    fn apply(&self, field: &'static str, mutate: impl FnOnce(&mut SettingsRecord)) {
        let old_value = self.get_field(field);
        debug!("updating setting {field}");

        let snapshot = {
            let mut record = match self.record.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            mutate(&mut record);
            record.clone()
        };

        self.adapter.save(&snapshot);

        let new_value = serde_json::to_value(&snapshot)
            .ok()
            .and_then(|value| value.get(field).cloned())
            .unwrap_or(Value::Null);

        let change = SettingChange::new(field.to_string(), old_value, new_value);
        let broadcast_service = self.broadcast_service.clone();
        tokio::spawn(async move {
            if let Err(e) = broadcast_service.broadcast(change).await {
                warn!("failed to broadcast settings change: {e}");
            }
        });
    }

    // UI preferences

    /// Sets the preferred UI language.
    pub fn set_preferred_language(&self, preferred_language: impl Into<String>) {
        let value = preferred_language.into();
        self.apply("preferredLanguage", |record| {
            record.preferred_language = value;
        });
    }

    /// Sets the conversation column width.
    pub fn set_center_mode(&self, center_mode: CenterMode) {
        self.apply("centerMode", |record| record.center_mode = center_mode);
    }

    /// Enables or disables Markdown rendering of messages.
    pub fn set_render_markdown(&self, render_markdown: bool) {
        self.apply("renderMarkdown", |record| {
            record.render_markdown = render_markdown;
        });
    }

    /// Shows or hides the purpose finder.
    pub fn set_show_purpose_finder(&self, show_purpose_finder: bool) {
        self.apply("showPurposeFinder", |record| {
            record.show_purpose_finder = show_purpose_finder;
        });
    }

    /// Shows or hides system messages in the conversation.
    pub fn set_show_system_messages(&self, show_system_messages: bool) {
        self.apply("showSystemMessages", |record| {
            record.show_system_messages = show_system_messages;
        });
    }

    /// Sets the zen mode level.
    pub fn set_zen_mode(&self, zen_mode: ZenMode) {
        self.apply("zenMode", |record| record.zen_mode = zen_mode);
    }

    // OpenAI API

    /// Sets the OpenAI API key.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        let value = api_key.into();
        self.apply("apiKey", |record| record.api_key = value);
    }

    /// Sets the OpenAI API host override.
    pub fn set_api_host(&self, api_host: impl Into<String>) {
        let value = api_host.into();
        self.apply("apiHost", |record| record.api_host = value);
    }

    /// Sets the OpenAI organization ID.
    pub fn set_api_organization_id(&self, api_organization_id: impl Into<String>) {
        let value = api_organization_id.into();
        self.apply("apiOrganizationId", |record| {
            record.api_organization_id = value;
        });
    }

    /// Sets the model sampling temperature. Trusted as given.
    pub fn set_model_temperature(&self, model_temperature: f64) {
        self.apply("modelTemperature", |record| {
            record.model_temperature = model_temperature;
        });
    }

    /// Sets the maximum response token count. Trusted as given.
    pub fn set_model_max_response_tokens(&self, model_max_response_tokens: u32) {
        self.apply("modelMaxResponseTokens", |record| {
            record.model_max_response_tokens = model_max_response_tokens;
        });
    }

    // ElevenLabs text-to-speech

    /// Sets the ElevenLabs API key.
    pub fn set_eleven_labs_api_key(&self, eleven_labs_api_key: impl Into<String>) {
        let value = eleven_labs_api_key.into();
        self.apply("elevenLabsApiKey", |record| {
            record.eleven_labs_api_key = value;
        });
    }

    /// Sets the ElevenLabs voice ID.
    pub fn set_eleven_labs_voice_id(&self, eleven_labs_voice_id: impl Into<String>) {
        let value = eleven_labs_voice_id.into();
        self.apply("elevenLabsVoiceId", |record| {
            record.eleven_labs_voice_id = value;
        });
    }

    /// Sets the auto-speak behavior.
    pub fn set_eleven_labs_auto_speak(&self, eleven_labs_auto_speak: AutoSpeak) {
        self.apply("elevenLabsAutoSpeak", |record| {
            record.eleven_labs_auto_speak = eleven_labs_auto_speak;
        });
    }

    // Prodia image generation

    /// Sets the Prodia API key.
    pub fn set_prodia_api_key(&self, prodia_api_key: impl Into<String>) {
        let value = prodia_api_key.into();
        self.apply("prodiaApiKey", |record| record.prodia_api_key = value);
    }

    /// Sets the Prodia model ID.
    pub fn set_prodia_model_id(&self, prodia_model_id: impl Into<String>) {
        let value = prodia_model_id.into();
        self.apply("prodiaModelId", |record| record.prodia_model_id = value);
    }

    /// Sets the negative prompt for image generation.
    pub fn set_prodia_negative_prompt(&self, prodia_negative_prompt: impl Into<String>) {
        let value = prodia_negative_prompt.into();
        self.apply("prodiaNegativePrompt", |record| {
            record.prodia_negative_prompt = value;
        });
    }

    /// Sets the diffusion step count. Trusted as given.
    pub fn set_prodia_steps(&self, prodia_steps: u32) {
        self.apply("prodiaSteps", |record| record.prodia_steps = prodia_steps);
    }

    /// Sets the guidance scale. Trusted as given.
    pub fn set_prodia_cfg_scale(&self, prodia_cfg_scale: f64) {
        self.apply("prodiaCfgScale", |record| {
            record.prodia_cfg_scale = prodia_cfg_scale;
        });
    }

    /// Sets the generation seed from raw text input.
    ///
    /// The only coercing setter: empty input or `-1` clears the seed, a
    /// numeric string sets it, and anything unparseable clears it rather
    /// than erroring.
    pub fn set_prodia_seed(&self, raw: &str) {
        let seed = coerce_seed(raw);
        self.apply("prodiaSeed", |record| record.prodia_seed = seed);
    }

    // Google Custom Search

    /// Sets the Google API key.
    pub fn set_google_api_key(&self, google_api_key: impl Into<String>) {
        let value = google_api_key.into();
        self.apply("googleApiKey", |record| record.google_api_key = value);
    }

    /// Sets the Google Custom Search Engine ID.
    pub fn set_cse_id(&self, cse_id: impl Into<String>) {
        let value = cse_id.into();
        self.apply("cseId", |record| record.cse_id = value);
    }
}
