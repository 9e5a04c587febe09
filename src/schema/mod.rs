//! Plain data records passed between the caller and the engine.

pub mod profile;
pub mod quest;
pub mod task;
