use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

static RE_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:hours?|hrs?)\b").unwrap());
static RE_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:minutes?|mins?)\b").unwrap());

/// Parse a free-text cook time into total minutes.
///
/// Understands "45 minutes", "2 hours", "1 hour 30 minutes" and the
/// abbreviated "hr"/"min" forms. Returns `None` when no time expression is
/// present, leaving the caller to treat the duration as unknown.
pub fn parse_cook_time_minutes(text: &str) -> Option<u32> {
    let hours = RE_HOURS
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);
    let minutes = RE_MINUTES
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    if hours == 0 && minutes == 0 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// How much time the user wants to spend cooking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CookingTimePreference {
    Quick,
    Medium,
    Long,
}

impl CookingTimePreference {
    /// Bucket boundaries: quick is 20 minutes or less, medium 21-40, long above 40.
    pub fn matches_minutes(&self, minutes: u32) -> bool {
        match self {
            CookingTimePreference::Quick => minutes <= 20,
            CookingTimePreference::Medium => (21..=40).contains(&minutes),
            CookingTimePreference::Long => minutes > 40,
        }
    }
}
