//! Loader error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned status {0} for {1}")]
    HttpStatus(u16, String),

    #[error("No content configured for URL: {0}")]
    NotConfigured(String),
}
