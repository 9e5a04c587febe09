use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::profile::MotivationProfile;

/// Newtype wrapper for quest IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub Uuid);

impl QuestId {
    /// A fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Difficulty rating shown on a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestDifficulty {
    Tutorial,
    Normal,
    Hard,
    Legendary,
}

impl QuestDifficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tutorial => "Tutorial",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for QuestDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Known priority levels. Anything else is treated like `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Exact-match lookup of a priority label ("low", "medium", "high", "urgent").
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// A synthesized quest. Only `completed` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub story: String,
    pub difficulty: QuestDifficulty,
    /// Minutes.
    pub estimated_time: u32,
    pub rewards: Vec<String>,
    /// At most 10.0.
    pub motivation_score: f64,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

impl Quest {
    /// Mark the quest as done.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

/// A complete generation request, as received from an outer surface
/// (JSON, the preview shell). `task` may be missing on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestRequest {
    pub task: Option<String>,
    pub profile: MotivationProfile,
    pub priority: Option<String>,
}

impl QuestRequest {
    pub fn new(task: &str) -> Self {
        Self {
            task: Some(task.to_string()),
            ..Self::default()
        }
    }
}
