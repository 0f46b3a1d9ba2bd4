//! Group error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Group {0} has no panes")]
    EmptyGroup(String),

    #[error("Group {group}: {nav_items} nav items for {panes} panes")]
    CountMismatch {
        group: String,
        nav_items: usize,
        panes: usize,
    },

    #[error("Duplicate pane identity in group {group}: {identity}")]
    DuplicateIdentity { group: String, identity: String },

    #[error("Pane index {index} out of bounds ({len} panes)")]
    IndexOutOfBounds { index: usize, len: usize },
}
