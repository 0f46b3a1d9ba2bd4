//! tabkit content loader
//!
//! Remote panes get their content on demand. The engine only sees the
//! [`ContentLoader`] trait; `HttpLoader` is the reqwest-backed
//! implementation used in production.

mod error;
mod loader;

pub use error::LoadError;
pub use loader::{CachePolicy, ContentLoader, HttpLoader, StaticLoader};

pub type Result<T> = std::result::Result<T, LoadError>;
