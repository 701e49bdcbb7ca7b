use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much interface chrome zen mode hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZenMode {
    /// Hide secondary chrome but keep conversation controls (default).
    #[default]
    Clean,

    /// Hide everything except the conversation itself.
    Cleaner,
}

impl fmt::Display for ZenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZenMode::Clean => write!(f, "clean"),
            ZenMode::Cleaner => write!(f, "cleaner"),
        }
    }
}
