//! Analysis, theme lookup, story synthesis and scoring.

pub mod analyzer;
pub mod engine;
pub mod picker;
pub mod scoring;
pub mod story;
pub mod themes;
