/// Theme template store — built-in vocabulary packs plus RON overrides.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::story::StoryStyle;

/// Theme used whenever the requested one is missing or unknown.
pub const DEFAULT_THEME: &str = "gaming";

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("theme '{theme}' has an empty {pool} pool")]
    EmptyPool { theme: String, pool: &'static str },
}

/// Vocabulary a theme supplies for titles, stories and rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTemplate {
    pub name: String,
    pub prefixes: Vec<String>,
    pub monsters: Vec<String>,
    pub rewards: Vec<String>,
    pub verbs: Vec<String>,
    pub story: StoryStyle,
}

impl ThemeTemplate {
    fn from_lists(
        name: &str,
        prefixes: &[&str],
        monsters: &[&str],
        rewards: &[&str],
        verbs: &[&str],
        story: StoryStyle,
    ) -> Self {
        fn owned(xs: &[&str]) -> Vec<String> {
            xs.iter().map(|s| s.to_string()).collect()
        }
        Self {
            name: name.to_string(),
            prefixes: owned(prefixes),
            monsters: owned(monsters),
            rewards: owned(rewards),
            verbs: owned(verbs),
            story,
        }
    }

    /// Named pools, in draw order.
    pub fn pools(&self) -> [(&'static str, &[String]); 4] {
        [
            ("prefixes", self.prefixes.as_slice()),
            ("monsters", self.monsters.as_slice()),
            ("verbs", self.verbs.as_slice()),
            ("rewards", self.rewards.as_slice()),
        ]
    }

    /// Reject a theme with an empty pool; a draw from it is impossible.
    pub(crate) fn validate(&self) -> Result<(), ThemeError> {
        for (pool, entries) in self.pools() {
            if entries.is_empty() {
                return Err(ThemeError::EmptyPool {
                    theme: self.name.clone(),
                    pool,
                });
            }
        }
        Ok(())
    }
}

/// A set of named themes. Read-only once handed to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSet {
    pub themes: FxHashMap<String, ThemeTemplate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Theme")]
struct RonTheme {
    prefixes: Vec<String>,
    monsters: Vec<String>,
    rewards: Vec<String>,
    verbs: Vec<String>,
    #[serde(default)]
    story: StoryStyle,
}

impl ThemeSet {
    /// The four stock themes: gaming, fantasy, sci_fi, productivity.
    pub fn builtin() -> ThemeSet {
        let stock = [
            ThemeTemplate::from_lists(
                "gaming",
                &["Epic", "Legendary", "Mythic"],
                &["Procrastination Dragon", "Distraction Demon", "Boredom Beast"],
                &["XP", "Achievement Points", "Loot Drops"],
                &["Defeat", "Conquer", "Vanquish", "Overcome"],
                StoryStyle::Arcade,
            ),
            ThemeTemplate::from_lists(
                "fantasy",
                &["Noble", "Heroic", "Courageous"],
                &["Laziness Troll", "Delay Golem", "Excuse Spirit"],
                &["Gold Coins", "Magic Items", "Experience"],
                &["Slay", "Banish", "Cleanse", "Restore"],
                StoryStyle::Saga,
            ),
            ThemeTemplate::from_lists(
                "sci_fi",
                &["Quantum", "Cyber", "Neural"],
                &["Time Waster", "Focus Virus", "Motivation Glitch"],
                &["Data Credits", "Tech Points", "Upgrade Modules"],
                &["Debug", "Optimize", "Delete", "Upgrade"],
                StoryStyle::Briefing,
            ),
            ThemeTemplate::from_lists(
                "productivity",
                &["Strategic", "Efficient", "Focused"],
                &["Chaos Monster", "Mess Dragon", "Clutter Beast"],
                &["Productivity Points", "Clarity Gems", "Order Tokens"],
                &["Organize", "Streamline", "Conquer", "Master"],
                StoryStyle::Briefing,
            ),
        ];

        let themes = stock
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect();
        ThemeSet { themes }
    }

    /// Load a theme set from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<ThemeSet, ThemeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a theme set from a RON string, rejecting themes with an empty pool.
    pub fn parse_ron(input: &str) -> Result<ThemeSet, ThemeError> {
        let raw: FxHashMap<String, RonTheme> = ron::from_str(input)?;
        let mut themes = FxHashMap::default();

        for (name, ron_theme) in raw {
            let theme = ThemeTemplate {
                name: name.clone(),
                prefixes: ron_theme.prefixes,
                monsters: ron_theme.monsters,
                rewards: ron_theme.rewards,
                verbs: ron_theme.verbs,
                story: ron_theme.story,
            };
            theme.validate()?;
            themes.insert(name, theme);
        }

        Ok(ThemeSet { themes })
    }

    /// Merge another theme set into this one. Themes from `other`
    /// replace themes in `self` with the same name.
    pub fn merge(&mut self, other: ThemeSet) {
        for (name, theme) in other.themes {
            self.themes.insert(name, theme);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ThemeTemplate> {
        self.themes.get(name)
    }

    /// Theme names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
