//! tabkit core
//!
//! Coordination layer for the tab widget: discovers groups from markup,
//! owns the page registry, and routes selection events (nav clicks,
//! fragment changes) into the transition engine.

mod controller;
mod error;
mod init;
mod markup;

pub use controller::{ClickDisposition, Tabs};
pub use error::CoreError;

// Re-export the component surface
pub use tabkit_dom::{
    Animator, DocumentAdapter, ElementRef, InstantAnimator, MemoryDocument, NavLink, PaneElement,
};
pub use tabkit_engine::{Activation, EngineError, TabChangeHook, TransitionEngine};
pub use tabkit_loader::{CachePolicy, ContentLoader, HttpLoader, LoadError, StaticLoader};
pub use tabkit_model::{
    build_pagination, GroupError, GroupHandle, NavHref, NavItem, PageLink, PaginationConfig, Pane,
    PaneKind, PanePagination, Registry, TabGroup, TabsConfig,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
