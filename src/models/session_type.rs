use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Work-session mode chosen at punch-in. Serialized with the names used in
/// the stored history blob (`fullDay`, `halfDay`, `shortLeave`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SessionType {
    FullDay,
    HalfDay,
    ShortLeave,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [
        SessionType::FullDay,
        SessionType::HalfDay,
        SessionType::ShortLeave,
    ];

    /// Name as stored in the history blob.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::FullDay => "fullDay",
            SessionType::HalfDay => "halfDay",
            SessionType::ShortLeave => "shortLeave",
        }
    }

    /// Human label used in tables and banners.
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::FullDay => "Full Day",
            SessionType::HalfDay => "Half Day",
            SessionType::ShortLeave => "Short Leave",
        }
    }

    /// Whether a first/second half qualifier applies to this session.
    pub fn has_sub_variant(&self) -> bool {
        !matches!(self, SessionType::FullDay)
    }

    /// Helper: parse user input (`full-day`, `fullDay`, `fd`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "fullday" | "full" | "fd" => Some(SessionType::FullDay),
            "halfday" | "half" | "hd" => Some(SessionType::HalfDay),
            "shortleave" | "short" | "sl" => Some(SessionType::ShortLeave),
            _ => None,
        }
    }
}
