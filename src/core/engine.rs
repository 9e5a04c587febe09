/// The quest engine: Task → Analysis → Quest orchestration.
///
/// Wires together task analysis, theme lookup, random draws, story
/// synthesis and scoring.

use chrono::Utc;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::analyzer;
use crate::core::picker::{choose, Picker, RandomPicker};
use crate::core::scoring;
use crate::core::story::{Narrator, StoryError, StoryStyle, StoryVars};
use crate::core::themes::{ThemeError, ThemeSet, ThemeTemplate, DEFAULT_THEME};
use crate::schema::profile::MotivationProfile;
use crate::schema::quest::{Quest, QuestId, QuestRequest};
use crate::schema::task::TaskAnalysis;

#[derive(Debug, Error)]
pub enum QuestError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),
    /// A built-in story template failed to parse. Only a programming
    /// error in the template constants can produce this.
    #[error("story error: {0}")]
    Story(#[from] StoryError),
    #[error("theme set has no '{0}' theme to fall back on")]
    MissingTheme(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Priority used when a request names none.
pub const DEFAULT_PRIORITY: &str = "medium";

const SUGGESTIONS: &[&str] = &[
    "Quick 5-minute meditation quest",
    "Organize one small area quest",
    "Answer one pending email quest",
    "Water break mini-quest",
    "Stretch and movement quest",
];

/// The top-level quest engine. Built via `QuestEngine::builder()`.
///
/// All operations take `&self`; the theme table is read-only after
/// construction, so one engine can serve concurrent callers.
#[derive(Debug)]
pub struct QuestEngine {
    themes: ThemeSet,
    fallback: ThemeTemplate,
    narrator: Narrator,
    seed: Option<u64>,
    generation_count: AtomicU64,
}

/// Builder for constructing a `QuestEngine`.
#[derive(Debug, Default)]
pub struct QuestEngineBuilder {
    themes_dir: Option<String>,
    seed: Option<u64>,
    /// Directly provided themes (for testing without files).
    themes: Option<ThemeSet>,
}

impl QuestEngine {
    pub fn builder() -> QuestEngineBuilder {
        QuestEngineBuilder::default()
    }

    /// Analyze a task string into category, complexity and difficulty.
    pub fn analyze_task(&self, task: &str) -> TaskAnalysis {
        analyzer::analyze(task)
    }

    /// Synthesize a quest using the engine's own random source.
    pub fn generate_quest(
        &self,
        task: &str,
        analysis: &TaskAnalysis,
        profile: &MotivationProfile,
        priority: &str,
    ) -> Quest {
        let mut picker = self.next_picker();
        self.generate_quest_with(&mut picker, task, analysis, profile, priority)
    }

    /// Synthesize a quest, drawing vocabulary from `picker`.
    ///
    /// Draw order is prefix, monster, verb, reward.
    pub fn generate_quest_with<P: Picker + ?Sized>(
        &self,
        picker: &mut P,
        task: &str,
        analysis: &TaskAnalysis,
        profile: &MotivationProfile,
        priority: &str,
    ) -> Quest {
        let requested = profile.preferred_theme.as_deref().unwrap_or(DEFAULT_THEME);
        let (template, style) = self.resolve_theme(requested);

        let prefix = choose(picker, &template.prefixes).as_str();
        let monster = choose(picker, &template.monsters).as_str();
        let verb = choose(picker, &template.verbs).as_str();
        let reward_label = choose(picker, &template.rewards).as_str();

        let vars = StoryVars {
            prefix,
            monster,
            verb,
            task,
        };
        let title = self.narrator.title(&vars);
        let story = self.narrator.story(style, &vars);

        let motivation_score = scoring::motivation_score(analysis, profile);
        let rewards = scoring::rewards(analysis, reward_label, motivation_score);
        let (difficulty, estimated_time) = scoring::difficulty_and_time(analysis, priority);

        let description = self.narrator.description(&vars);

        let quest = Quest {
            id: QuestId::new(),
            title,
            description,
            story,
            difficulty,
            estimated_time,
            rewards,
            motivation_score,
            created_at: Utc::now(),
            completed: false,
        };
        debug!(
            id = %quest.id,
            theme = %template.name,
            difficulty = %quest.difficulty,
            minutes = quest.estimated_time,
            score = quest.motivation_score,
            "quest generated"
        );
        quest
    }

    /// Generate several quests for the same task, each with its own draw.
    pub fn generate_variants(
        &self,
        task: &str,
        analysis: &TaskAnalysis,
        profile: &MotivationProfile,
        priority: &str,
        count: usize,
    ) -> Vec<Quest> {
        (0..count)
            .map(|_| self.generate_quest(task, analysis, profile, priority))
            .collect()
    }

    /// Analyze and generate in one step from a request record.
    ///
    /// The only failure is a request without task text.
    pub fn quest_for(&self, request: &QuestRequest) -> Result<Quest, QuestError> {
        let task = request
            .task
            .as_deref()
            .ok_or_else(|| QuestError::InvalidInput("task is required".to_string()))?;
        let analysis = self.analyze_task(task);
        let priority = request.priority.as_deref().unwrap_or(DEFAULT_PRIORITY);
        Ok(self.generate_quest(task, &analysis, &request.profile, priority))
    }

    /// Look up a quest by ID. Quests are not stored, so this is always `None`.
    pub fn get_quest(&self, quest_id: &str) -> Option<Quest> {
        debug!(quest_id, "quest lookup without a store");
        None
    }

    /// One of a fixed set of short quest ideas.
    pub fn suggest_next_quest(&self) -> &'static str {
        let mut picker = self.next_picker();
        self.suggest_next_quest_with(&mut picker)
    }

    pub fn suggest_next_quest_with<P: Picker + ?Sized>(&self, picker: &mut P) -> &'static str {
        *choose(picker, SUGGESTIONS)
    }

    /// The fixed suggestion list.
    pub fn suggestions() -> &'static [&'static str] {
        SUGGESTIONS
    }

    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    /// Requested theme and its story style. Unknown names draw vocabulary
    /// from the default theme but keep the briefing story.
    fn resolve_theme(&self, requested: &str) -> (&ThemeTemplate, StoryStyle) {
        match self.themes.get(requested) {
            Some(template) => (template, template.story),
            None => {
                debug!(requested, fallback = DEFAULT_THEME, "unknown theme");
                (&self.fallback, StoryStyle::default())
            }
        }
    }

    fn next_picker(&self) -> RandomPicker {
        match self.seed {
            Some(seed) => {
                let count = self.generation_count.fetch_add(1, Ordering::Relaxed);
                RandomPicker::seeded(seed.wrapping_add(count))
            }
            None => RandomPicker::from_entropy(),
        }
    }
}

impl QuestEngineBuilder {
    pub fn themes_dir(mut self, path: &str) -> Self {
        self.themes_dir = Some(path.to_string());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Provide themes directly (for testing without files).
    pub fn with_themes(mut self, themes: ThemeSet) -> Self {
        self.themes = Some(themes);
        self
    }

    /// Build the engine: built-in themes, then theme files, then directly
    /// provided themes, each overriding the last by name.
    pub fn build(self) -> Result<QuestEngine, QuestError> {
        let mut themes = ThemeSet::builtin();

        if let Some(ref dir) = self.themes_dir {
            if Path::new(dir).exists() {
                load_ron_files_from_dir(dir, |path| {
                    let set = ThemeSet::load_from_ron(path)?;
                    info!(path = %path.display(), themes = set.len(), "loaded theme file");
                    themes.merge(set);
                    Ok(())
                })?;
            }
        }

        if let Some(direct) = self.themes {
            themes.merge(direct);
        }

        for name in themes.names() {
            if let Some(theme) = themes.get(name) {
                theme.validate()?;
            }
        }

        let fallback = themes
            .get(DEFAULT_THEME)
            .cloned()
            .ok_or_else(|| QuestError::MissingTheme(DEFAULT_THEME.to_string()))?;

        Ok(QuestEngine {
            themes,
            fallback,
            narrator: Narrator::new()?,
            seed: self.seed,
            generation_count: AtomicU64::new(0),
        })
    }
}

/// Load all .ron files from a directory, in file-name order.
fn load_ron_files_from_dir<F>(dir: &str, mut loader: F) -> Result<(), QuestError>
where
    F: FnMut(&Path) -> Result<(), QuestError>,
{
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    paths.sort();
    for path in &paths {
        loader(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::picker::SequencePicker;
    use crate::schema::quest::QuestDifficulty;
    use crate::schema::task::{Category, Complexity};

    fn build_test_engine() -> QuestEngine {
        QuestEngine::builder().seed(42).build().unwrap()
    }

    #[test]
    fn generate_with_first_picks() {
        let engine = build_test_engine();
        let analysis = engine.analyze_task("clean my room");
        let mut picker = SequencePicker::first();
        let quest = engine.generate_quest_with(
            &mut picker,
            "clean my room",
            &analysis,
            &MotivationProfile::default(),
            "medium",
        );

        assert_eq!(
            quest.title,
            "Epic Quest: Defeat the Procrastination Dragon of Clean My Room"
        );
        assert_eq!(quest.rewards[0], "10 XP");
        assert_eq!(quest.difficulty, QuestDifficulty::Normal);
        assert_eq!(quest.estimated_time, 50);
        assert_eq!(quest.motivation_score, 6.0);
        assert!(!quest.completed);
        assert!(quest.story.contains("🎮 QUEST STARTED 🎮"));
    }

    #[test]
    fn draw_order_prefix_monster_verb_reward() {
        let engine = build_test_engine();
        let analysis = engine.analyze_task("write a poem");
        let mut picker = SequencePicker::new(vec![1, 2, 3, 0]);
        let quest = engine.generate_quest_with(
            &mut picker,
            "write a poem",
            &analysis,
            &MotivationProfile::themed("fantasy"),
            "medium",
        );
        assert_eq!(
            quest.title,
            "Heroic Quest: Restore the Excuse Spirit of Write A Poem"
        );
        assert_eq!(quest.rewards[0], "10 Gold Coins");
        assert!(quest.story.contains("🏰 FANTASY QUEST BEGINS 🏰"));
    }

    #[test]
    fn unknown_theme_uses_gaming_vocabulary_and_briefing() {
        let engine = build_test_engine();
        let analysis = engine.analyze_task("clean my room");
        let mut picker = SequencePicker::first();
        let quest = engine.generate_quest_with(
            &mut picker,
            "clean my room",
            &analysis,
            &MotivationProfile::themed("atlantis"),
            "medium",
        );
        assert!(quest.title.starts_with("Epic Quest: Defeat the Procrastination Dragon"));
        assert!(quest.story.contains("OPERATION: EPIC QUEST"));
    }

    #[test]
    fn seeded_engines_agree() {
        let analysis = TaskAnalysis {
            category: Category::Work,
            complexity: Complexity::Moderate,
            estimated_difficulty: 5,
        };
        let profile = MotivationProfile::default();
        let a = build_test_engine().generate_quest("ship it", &analysis, &profile, "high");
        let b = build_test_engine().generate_quest("ship it", &analysis, &profile, "high");
        assert_eq!(a.title, b.title);
        assert_eq!(a.rewards, b.rewards);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn quest_for_requires_task() {
        let engine = build_test_engine();
        let err = engine.quest_for(&QuestRequest::default()).unwrap_err();
        assert!(matches!(err, QuestError::InvalidInput(_)));
    }

    #[test]
    fn quest_for_defaults_priority() {
        let engine = build_test_engine();
        let quest = engine.quest_for(&QuestRequest::new("clean my room")).unwrap();
        assert_eq!(quest.difficulty, QuestDifficulty::Normal);
        assert_eq!(quest.estimated_time, 50);
    }

    #[test]
    fn get_quest_is_always_absent() {
        let engine = build_test_engine();
        let quest = engine.quest_for(&QuestRequest::new("read a book")).unwrap();
        assert!(engine.get_quest(&quest.id.to_string()).is_none());
    }

    #[test]
    fn suggestions_come_from_fixed_list() {
        let engine = build_test_engine();
        for _ in 0..50 {
            assert!(QuestEngine::suggestions().contains(&engine.suggest_next_quest()));
        }
    }

    #[test]
    fn builder_with_seed() {
        let engine = QuestEngine::builder().seed(12345).build().unwrap();
        assert_eq!(engine.seed, Some(12345));
    }

    #[test]
    fn empty_fallback_pool_fails_build() {
        let mut gaming = ThemeSet::builtin().get(DEFAULT_THEME).unwrap().clone();
        gaming.prefixes.clear();
        let mut direct = ThemeSet::default();
        direct.themes.insert(gaming.name.clone(), gaming);

        let err = QuestEngine::builder().with_themes(direct).build().unwrap_err();
        assert!(matches!(
            err,
            QuestError::Theme(ThemeError::EmptyPool { ref theme, pool }) if theme == "gaming" && pool == "prefixes"
        ));
    }

    #[test]
    fn missing_themes_dir_is_ignored() {
        let engine = QuestEngine::builder()
            .themes_dir("does/not/exist")
            .build()
            .unwrap();
        assert_eq!(engine.themes().len(), 4);
    }
}
