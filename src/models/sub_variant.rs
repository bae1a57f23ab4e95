use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// First/second half qualifier for half-day and short-leave sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SubVariant {
    #[default]
    #[value(name = "first", alias = "firstHalf")]
    FirstHalf,
    #[value(name = "second", alias = "secondHalf")]
    SecondHalf,
}

impl SubVariant {
    pub fn label(&self) -> &'static str {
        match self {
            SubVariant::FirstHalf => "First Half",
            SubVariant::SecondHalf => "Second Half",
        }
    }

    /// Helper: parse user input (`first`, `firstHalf`, `1`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "first" | "firsthalf" | "1" => Some(SubVariant::FirstHalf),
            "second" | "secondhalf" | "2" => Some(SubVariant::SecondHalf),
            _ => None,
        }
    }
}
