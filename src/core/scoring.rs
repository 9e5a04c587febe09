/// Motivation score, reward list, and difficulty/time estimates.

use crate::schema::profile::MotivationProfile;
use crate::schema::quest::{Priority, QuestDifficulty};
use crate::schema::task::{Complexity, TaskAnalysis};

pub const BASE_MOTIVATION: f64 = 5.0;
pub const MAX_MOTIVATION: f64 = 10.0;

/// Score above which the streak rewards are granted.
pub const BONUS_MOTIVATION_THRESHOLD: f64 = 7.0;
/// Difficulty above which the boss rewards are granted.
pub const BOSS_DIFFICULTY_THRESHOLD: u8 = 7;

/// How motivating a quest is likely to be, capped at 10.0.
///
/// There is deliberately no lower bound; with the current weights the
/// minimum reachable score is 4.0.
pub fn motivation_score(analysis: &TaskAnalysis, profile: &MotivationProfile) -> f64 {
    let mut score = BASE_MOTIVATION;

    if profile.loves_stories {
        score += 2.0;
    }
    if profile.competitive {
        score += 1.5;
    }
    if profile.social_motivated {
        score += 1.0;
    }

    match analysis.complexity {
        Complexity::Simple => score += 1.0,
        Complexity::Complex => score -= 1.0,
        Complexity::Moderate => {}
    }

    score.min(MAX_MOTIVATION)
}

/// Reward list: three base rewards, then the streak and boss bonuses.
pub fn rewards(analysis: &TaskAnalysis, reward_label: &str, motivation_score: f64) -> Vec<String> {
    let mut rewards = vec![
        format!("10 {}", reward_label),
        "1 Achievement".to_string(),
        "100 XP".to_string(),
    ];

    if motivation_score > BONUS_MOTIVATION_THRESHOLD {
        rewards.push("Rare Item Drop".to_string());
        rewards.push("Streak Bonus".to_string());
    }

    if analysis.estimated_difficulty > BOSS_DIFFICULTY_THRESHOLD {
        rewards.push("Boss Loot".to_string());
        rewards.push("Title Upgrade".to_string());
    }

    rewards
}

/// Multiplier for a priority label; unknown labels count as 1.0.
pub fn priority_multiplier(priority: &str) -> f64 {
    match Priority::parse(priority) {
        Some(Priority::Low) => 0.8,
        Some(Priority::Medium) | None => 1.0,
        Some(Priority::High) => 1.3,
        Some(Priority::Urgent) => 1.5,
    }
}

/// Label for a priority-adjusted difficulty. Each bound is inclusive.
pub fn difficulty_label(adjusted: f64) -> QuestDifficulty {
    if adjusted <= 3.0 {
        QuestDifficulty::Tutorial
    } else if adjusted <= 5.0 {
        QuestDifficulty::Normal
    } else if adjusted <= 7.0 {
        QuestDifficulty::Hard
    } else {
        QuestDifficulty::Legendary
    }
}

pub fn time_multiplier(difficulty: QuestDifficulty) -> f64 {
    match difficulty {
        QuestDifficulty::Tutorial => 0.8,
        QuestDifficulty::Normal => 1.0,
        QuestDifficulty::Hard => 1.3,
        QuestDifficulty::Legendary => 1.6,
    }
}

/// Difficulty label and minutes for a task at a given priority.
///
/// The label comes from the priority-adjusted difficulty, but the base time
/// is ten minutes per point of the *unadjusted* difficulty.
pub fn difficulty_and_time(analysis: &TaskAnalysis, priority: &str) -> (QuestDifficulty, u32) {
    let raw = f64::from(analysis.estimated_difficulty);
    let label = difficulty_label(raw * priority_multiplier(priority));
    let base_time = raw * 10.0;
    let minutes = (base_time * time_multiplier(label)).floor() as u32;
    (label, minutes)
}
