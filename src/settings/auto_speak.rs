use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When spoken playback of assistant responses starts automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub enum AutoSpeak {
    /// Never speak automatically.
    Off,

    /// Speak the first line of each response as it arrives (default).
    #[default]
    FirstLine,
}

impl fmt::Display for AutoSpeak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoSpeak::Off => write!(f, "off"),
            AutoSpeak::FirstLine => write!(f, "firstLine"),
        }
    }
}
