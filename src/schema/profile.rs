use serde::{Deserialize, Serialize};

/// Caller-supplied preferences that steer theme choice and scoring.
///
/// Every field is optional on the wire; missing flags read as `false` and a
/// missing theme falls back to "gaming".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotivationProfile {
    pub preferred_theme: Option<String>,
    pub loves_stories: bool,
    pub competitive: bool,
    pub social_motivated: bool,
}

impl MotivationProfile {
    /// Profile with only a preferred theme set.
    pub fn themed(theme: &str) -> Self {
        Self {
            preferred_theme: Some(theme.to_string()),
            ..Self::default()
        }
    }
}
