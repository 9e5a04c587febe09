/// Task analysis — keyword categorization, complexity and difficulty estimates.

use tracing::debug;

use crate::schema::task::{Category, Complexity, DifficultyTier, TaskAnalysis};

/// Category keyword table. Order is the tie-break: first match wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Cleaning,
        &["clean", "wash", "organize", "tidy", "declutter"],
    ),
    (
        Category::Work,
        &["work", "job", "project", "task", "assignment"],
    ),
    (
        Category::Study,
        &["study", "learn", "read", "research", "practice"],
    ),
    (
        Category::Exercise,
        &["exercise", "workout", "run", "gym", "fitness"],
    ),
    (
        Category::Social,
        &["call", "email", "message", "connect", "meet"],
    ),
    (
        Category::Chores,
        &["laundry", "dishes", "grocery", "shopping", "cook"],
    ),
    (
        Category::Creative,
        &["write", "draw", "create", "design", "make"],
    ),
];

/// Difficulty keyword table, scanned easy → medium → hard.
const DIFFICULTY_KEYWORDS: &[(DifficultyTier, &[&str])] = &[
    (DifficultyTier::Easy, &["quick", "simple", "basic", "easy"]),
    (DifficultyTier::Medium, &["moderate", "normal", "standard"]),
    (
        DifficultyTier::Hard,
        &["hard", "difficult", "complex", "challenge"],
    ),
];

/// Difficulty used when no tier keyword appears.
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Analyze a task string. Never fails; empty text is a simple general task.
pub fn analyze(task: &str) -> TaskAnalysis {
    let lowered = task.to_lowercase();
    let analysis = TaskAnalysis {
        category: detect_category(&lowered),
        complexity: assess_complexity(task),
        estimated_difficulty: estimate_difficulty(&lowered),
    };
    debug!(
        category = analysis.category.name(),
        complexity = analysis.complexity.name(),
        difficulty = analysis.estimated_difficulty,
        "task analyzed"
    );
    analysis
}

/// First category whose keyword is a substring of the lowercased text.
pub fn detect_category(lowered: &str) -> Category {
    first_match(CATEGORY_KEYWORDS, lowered).unwrap_or(Category::General)
}

/// Whitespace word count: ≤3 simple, ≤6 moderate, otherwise complex.
pub fn assess_complexity(task: &str) -> Complexity {
    match task.split_whitespace().count() {
        0..=3 => Complexity::Simple,
        4..=6 => Complexity::Moderate,
        _ => Complexity::Complex,
    }
}

/// Difficulty of the first tier whose keyword appears in the lowercased text.
pub fn estimate_difficulty(lowered: &str) -> u8 {
    first_match(DIFFICULTY_KEYWORDS, lowered)
        .map(|tier| tier.score())
        .unwrap_or(DEFAULT_DIFFICULTY)
}

fn first_match<T: Copy>(table: &[(T, &[&str])], lowered: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(value, _)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorize_cleaning() {
        assert_eq!(analyze("clean my room").category, Category::Cleaning);
        assert_eq!(analyze("Tidy the garage").category, Category::Cleaning);
    }

    #[test]
    fn categorize_is_case_insensitive() {
        assert_eq!(analyze("GO TO THE GYM").category, Category::Exercise);
        assert_eq!(analyze("Email Grandma").category, Category::Social);
    }

    #[test]
    fn first_category_wins() {
        // "organize" (cleaning) and "project" (work) both match
        assert_eq!(analyze("organize project files").category, Category::Cleaning);
        // "homework" contains "work", which is checked before "study"
        assert_eq!(analyze("study for homework").category, Category::Work);
    }

    #[test]
    fn substring_matching() {
        // "running" contains "run"
        assert_eq!(analyze("morning running").category, Category::Exercise);
        // "cooking" contains "cook"
        assert_eq!(analyze("cooking dinner").category, Category::Chores);
    }

    #[test]
    fn uncategorized_is_general() {
        assert_eq!(analyze("water the plants").category, Category::General);
    }

    #[test]
    fn complexity_by_word_count() {
        assert_eq!(assess_complexity("one two three"), Complexity::Simple);
        assert_eq!(assess_complexity("one two three four"), Complexity::Moderate);
        assert_eq!(assess_complexity("a b c d e f"), Complexity::Moderate);
        assert_eq!(assess_complexity("a b c d e f g"), Complexity::Complex);
    }

    #[test]
    fn complexity_ignores_extra_whitespace() {
        assert_eq!(assess_complexity("  one \t two\n three  "), Complexity::Simple);
    }

    #[test]
    fn difficulty_tiers() {
        assert_eq!(estimate_difficulty("quick errand"), 3);
        assert_eq!(estimate_difficulty("standard report"), 5);
        assert_eq!(estimate_difficulty("difficult conversation"), 8);
        assert_eq!(estimate_difficulty("walk the dog"), DEFAULT_DIFFICULTY);
    }

    #[test]
    fn easier_tier_checked_first() {
        // "simple" (easy) beats "challenge" (hard)
        assert_eq!(estimate_difficulty("simple challenge"), 3);
    }

    #[test]
    fn empty_task() {
        let analysis = analyze("");
        assert_eq!(analysis.category, Category::General);
        assert_eq!(analysis.complexity, Complexity::Simple);
        assert_eq!(analysis.estimated_difficulty, 5);
    }

    #[test]
    fn urgent_difficult_project() {
        let analysis = analyze("urgent difficult project");
        assert_eq!(analysis.category, Category::Work);
        assert_eq!(analysis.complexity, Complexity::Simple);
        assert_eq!(analysis.estimated_difficulty, 8);
    }
}
