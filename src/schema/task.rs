use serde::{Deserialize, Serialize};

/// The kind of chore a task describes, detected from keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cleaning,
    Work,
    Study,
    Exercise,
    Social,
    Chores,
    Creative,
    General,
}

impl Category {
    /// Returns the lowercase name of this category (e.g., "cleaning").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cleaning => "cleaning",
            Self::Work => "work",
            Self::Study => "study",
            Self::Exercise => "exercise",
            Self::Social => "social",
            Self::Chores => "chores",
            Self::Creative => "creative",
            Self::General => "general",
        }
    }
}

/// How involved a task looks, judged by its word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

/// Difficulty tier matched from keywords in the task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// Difficulty on the 1-10 scale this tier stands for.
    pub fn score(&self) -> u8 {
        match self {
            Self::Easy => 3,
            Self::Medium => 5,
            Self::Hard => 8,
        }
    }
}

/// Structured result of analyzing a task string.
///
/// Fields are public so callers can build an analysis by hand and feed it
/// straight into quest synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    pub category: Category,
    pub complexity: Complexity,
    /// 1-10 scale.
    pub estimated_difficulty: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names() {
        assert_eq!(Category::Cleaning.name(), "cleaning");
        assert_eq!(Category::Creative.name(), "creative");
        assert_eq!(Category::General.name(), "general");
    }

    #[test]
    fn tier_scores() {
        assert_eq!(DifficultyTier::Easy.score(), 3);
        assert_eq!(DifficultyTier::Medium.score(), 5);
        assert_eq!(DifficultyTier::Hard.score(), 8);
    }

    #[test]
    fn analysis_serializes_snake_case() {
        let analysis = TaskAnalysis {
            category: Category::Chores,
            complexity: Complexity::Moderate,
            estimated_difficulty: 5,
        };
        let text = ron::to_string(&analysis).unwrap();
        assert!(text.contains("chores"));
        assert!(text.contains("moderate"));
    }
}
