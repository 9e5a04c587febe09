//! Quest Engine — turns plain task descriptions into themed quests.
//!
//! A task string is analyzed with keyword heuristics into a category,
//! complexity and difficulty estimate, then synthesized into a quest with a
//! themed title, a short story, a difficulty rating, a time estimate and a
//! reward list. No inference, no storage, no I/O beyond optional theme files.

pub mod core;
pub mod schema;

pub use crate::core::engine::{QuestEngine, QuestEngineBuilder, QuestError};
pub use crate::core::picker::{Picker, RandomPicker, SequencePicker};
pub use crate::schema::profile::MotivationProfile;
pub use crate::schema::quest::{Priority, Quest, QuestDifficulty, QuestId, QuestRequest};
pub use crate::schema::task::{Category, Complexity, TaskAnalysis};
