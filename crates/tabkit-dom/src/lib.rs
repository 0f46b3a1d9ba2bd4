//! tabkit document adapter seam
//!
//! The tab engine never touches a real document. Everything it needs from
//! the page - element discovery, class and attribute mutation, geometry,
//! animated transitions - goes through the [`DocumentAdapter`] and
//! [`Animator`] traits defined here. `MemoryDocument` and
//! `InstantAnimator` are complete in-memory implementations, used for
//! headless operation and throughout the workspace's tests.

mod animator;
mod document;
mod element;
mod memory;

pub use animator::{Animator, InstantAnimator};
pub use document::DocumentAdapter;
pub use element::{ElementRef, NavLink, PaneElement};
pub use memory::MemoryDocument;
