//! Engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Group error: {0}")]
    Group(#[from] tabkit_model::GroupError),
}
