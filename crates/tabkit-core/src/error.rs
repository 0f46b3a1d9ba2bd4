//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Group error: {0}")]
    Group(#[from] tabkit_model::GroupError),

    #[error("Engine error: {0}")]
    Engine(#[from] tabkit_engine::EngineError),

    #[error("Configuration error: {0}")]
    Config(String),
}
