//! WASM bindings for quest-engine — powers the interactive web demo.

use wasm_bindgen::prelude::*;

use quest_engine::core::themes::ThemeSet;
use quest_engine::{Priority, QuestEngine, QuestRequest};

// ---------------------------------------------------------------------------
// Embedded theme data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const SEASONAL_THEMES: &str = include_str!("../../theme_data/seasonal.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct AnalysisInfo {
    category: &'static str,
    complexity: &'static str,
    estimated_difficulty: u8,
}

#[derive(serde::Serialize)]
struct ThemeInfo {
    name: String,
    prefixes: Vec<String>,
    monsters: Vec<String>,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

/// Interactive demo wrapping one engine with the built-in and seasonal themes.
#[wasm_bindgen]
pub struct QuestDemo {
    engine: QuestEngine,
}

#[wasm_bindgen]
impl QuestDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<QuestDemo, JsError> {
        let seasonal = ThemeSet::parse_ron(data::SEASONAL_THEMES)
            .map_err(|e| JsError::new(&format!("Theme data error: {e}")))?;
        let engine = QuestEngine::builder()
            .seed(seed)
            .with_themes(seasonal)
            .build()
            .map_err(|e| JsError::new(&format!("Engine error: {e}")))?;
        Ok(QuestDemo { engine })
    }

    /// Analyze a task. Returns JSON with category, complexity and difficulty.
    pub fn analyze(&self, task: &str) -> Result<String, JsError> {
        let analysis = self.engine.analyze_task(task);
        to_json(&AnalysisInfo {
            category: analysis.category.name(),
            complexity: analysis.complexity.name(),
            estimated_difficulty: analysis.estimated_difficulty,
        })
    }

    /// Generate a quest from a JSON request.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "task": "clean my room",
    ///   "profile": { "preferred_theme": "fantasy", "loves_stories": true },
    ///   "priority": "high"
    /// }
    /// ```
    /// Only `task` is required.
    pub fn generate(&self, request_json: &str) -> Result<String, JsError> {
        let request: QuestRequest = serde_json::from_str(request_json)
            .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
        let quest = self
            .engine
            .quest_for(&request)
            .map_err(|e| JsError::new(&format!("Quest error: {e}")))?;
        to_json(&quest)
    }

    /// Suggest a short follow-up quest.
    pub fn suggest(&self) -> String {
        self.engine.suggest_next_quest().to_string()
    }

    /// Return a JSON array describing every loaded theme.
    pub fn themes(&self) -> Result<String, JsError> {
        let themes = self.engine.themes();
        let info: Vec<ThemeInfo> = themes
            .names()
            .into_iter()
            .filter_map(|name| themes.get(name))
            .map(|t| ThemeInfo {
                name: t.name.clone(),
                prefixes: t.prefixes.clone(),
                monsters: t.monsters.clone(),
            })
            .collect();
        to_json(&info)
    }

    /// Return JSON array of recognized priority levels.
    pub fn priorities() -> String {
        let names: Vec<&str> = Priority::ALL.iter().map(|p| p.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Rebuild the engine with a new seed.
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        let fresh = QuestDemo::new(seed)?;
        self.engine = fresh.engine;
        Ok(())
    }
}
