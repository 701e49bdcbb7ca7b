use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the main conversation column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum CenterMode {
    /// Compact column, comfortable for reading on large displays.
    Narrow,

    /// Wider column with room for code blocks (default).
    #[default]
    Wide,

    /// Use the full viewport width.
    Full,
}

impl fmt::Display for CenterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CenterMode::Narrow => write!(f, "narrow"),
            CenterMode::Wide => write!(f, "wide"),
            CenterMode::Full => write!(f, "full"),
        }
    }
}
