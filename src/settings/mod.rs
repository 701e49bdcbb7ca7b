//! Settings record schema and default resolution.
//!
//! Defines the full set of user-configurable fields for the Lumen client,
//! their static defaults, and the tiered initial construction used on the
//! first run (environment locale, legacy API key migration).

mod auto_speak;
mod center_mode;
mod locale;
mod seed;
mod zen_mode;

#[cfg(test)]
mod tests;

pub use auto_speak::AutoSpeak;
pub use center_mode::CenterMode;
pub use locale::system_locale;
pub use seed::coerce_seed;
pub use zen_mode::ZenMode;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fallback UI language when the environment provides no usable locale.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// The complete set of user-configurable settings.
///
/// One flat record; the serialized (camelCase) field names double as the
/// persisted map keys and the change-notification field names. Fields are
/// grouped by the service they configure, but the grouping is cosmetic -
/// the snapshot stays a single flat object.
///
/// Snapshots that predate a field deserialize with that field's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsRecord {
    // UI preferences
    /// BCP 47 language tag used for the UI.
    pub preferred_language: String,

    /// Width of the main conversation column.
    pub center_mode: CenterMode,

    /// Whether assistant messages are rendered as Markdown.
    pub render_markdown: bool,

    /// Whether the purpose finder bar is shown above new conversations.
    pub show_purpose_finder: bool,

    /// Whether system messages are visible in the conversation.
    pub show_system_messages: bool,

    /// How much chrome zen mode hides.
    pub zen_mode: ZenMode,

    // OpenAI API
    /// OpenAI API key. Not validated or encrypted here.
    pub api_key: String,

    /// Override for the OpenAI API host; empty means the provider default.
    pub api_host: String,

    /// OpenAI organization ID; empty means unset.
    pub api_organization_id: String,

    /// Sampling temperature passed to the model.
    pub model_temperature: f64,

    /// Maximum number of tokens requested per model response.
    pub model_max_response_tokens: u32,

    // ElevenLabs text-to-speech
    /// ElevenLabs API key.
    pub eleven_labs_api_key: String,

    /// ElevenLabs voice ID; empty means the service default voice.
    pub eleven_labs_voice_id: String,

    /// When spoken playback of responses starts automatically.
    pub eleven_labs_auto_speak: AutoSpeak,

    // Prodia image generation
    /// Prodia API key.
    pub prodia_api_key: String,

    /// Prodia model ID; empty means the service default model.
    pub prodia_model_id: String,

    /// Negative prompt appended to image generation requests.
    pub prodia_negative_prompt: String,

    /// Diffusion step count. Trusted as given, no clamping.
    pub prodia_steps: u32,

    /// Classifier-free guidance scale. Trusted as given, no clamping.
    pub prodia_cfg_scale: f64,

    /// Generation seed; `None` lets the service pick one.
    pub prodia_seed: Option<i64>,

    // Google Custom Search
    /// Google API key used for the search tool.
    pub google_api_key: String,

    /// Google Custom Search Engine ID.
    pub cse_id: String,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            preferred_language: FALLBACK_LANGUAGE.to_string(),
            center_mode: CenterMode::default(),
            render_markdown: false,
            show_purpose_finder: false,
            show_system_messages: false,
            zen_mode: ZenMode::default(),

            api_key: String::new(),
            api_host: String::new(),
            api_organization_id: String::new(),
            model_temperature: 0.5,
            model_max_response_tokens: 1024,

            eleven_labs_api_key: String::new(),
            eleven_labs_voice_id: String::new(),
            eleven_labs_auto_speak: AutoSpeak::default(),

            prodia_api_key: String::new(),
            prodia_model_id: String::new(),
            prodia_negative_prompt: String::new(),
            prodia_steps: 25,
            prodia_cfg_scale: 7.0,
            prodia_seed: None,

            google_api_key: String::new(),
            cse_id: String::new(),
        }
    }
}

impl SettingsRecord {
    /// Builds the first-run record when no persisted snapshot exists.
    ///
    /// Two fields have a higher-priority source than their static default:
    /// the UI language takes the environment locale when one is available,
    /// and the OpenAI API key takes the value migrated from the legacy
    /// standalone storage key. Everything else starts from [`Default`].
    pub fn initial(locale: Option<String>, legacy_api_key: Option<String>) -> Self {
        Self {
            preferred_language: locale.unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()),
            api_key: legacy_api_key.unwrap_or_default(),
            ..Self::default()
        }
    }
}
