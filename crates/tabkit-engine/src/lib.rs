//! tabkit transition engine
//!
//! Executes the activation protocol for a tab group: nav highlight swap,
//! fade out, optional remote fetch, container resize, fade in. Each run
//! is tagged with the group's generation counter; a newer activation
//! supersedes an in-flight one, whose remaining stages degrade into
//! no-ops.

mod engine;
mod error;

pub use engine::{Activation, TabChangeHook, TransitionEngine};
pub use error::EngineError;

pub type Result<T> = std::result::Result<T, EngineError>;
