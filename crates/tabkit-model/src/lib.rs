//! tabkit group model
//!
//! The structural model of a tabbed component: its panes, nav items,
//! active pane, and resolved configuration, plus the page-wide registry
//! that maps external selectors back to (group, pane). Activation
//! bookkeeping lives here; the animated protocol itself is driven by
//! `tabkit-engine`.

mod config;
mod error;
mod group;
mod nav;
mod pagination;
mod pane;
mod registry;

pub use config::{PaginationConfig, TabsConfig};
pub use error::GroupError;
pub use group::{ActivationTicket, GroupHandle, TabGroup};
pub use nav::{NavHref, NavItem};
pub use pagination::{build_pagination, PageLink, PanePagination};
pub use pane::{Pane, PaneKind};
pub use registry::Registry;

pub type Result<T> = std::result::Result<T, GroupError>;
