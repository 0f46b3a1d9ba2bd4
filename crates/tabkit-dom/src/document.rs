//! Document adapter trait

use crate::element::{ElementRef, NavLink, PaneElement};

/// Everything the tab engine needs from the host document.
///
/// Mutations are fire-and-forget: adapter-level faults are the adapter's
/// problem and never feed back into the engine's recovery policy.
pub trait DocumentAdapter: Send + Sync {
    // Discovery

    /// Anchors inside the group's nav list, in document order.
    fn nav_links(&self, root: &ElementRef) -> Vec<NavLink>;

    /// Content panes under the group root, in document order.
    fn pane_elements(&self, root: &ElementRef) -> Vec<PaneElement>;

    // Structure

    /// Wrap all panes of the group in a new container element carrying
    /// `class`, and return it. The container's height is what the engine
    /// animates during a transition.
    fn wrap_panes(&self, root: &ElementRef, class: &str) -> ElementRef;

    /// Materialize an empty pane placeholder after the group's last pane,
    /// with the given class and element id. Used for ajax-sourced nav
    /// entries whose content arrives later.
    fn insert_placeholder(&self, root: &ElementRef, class: &str, identity: &str) -> ElementRef;

    /// Append a rendered markup fragment (pagination nav) into an element.
    fn append_markup(&self, element: &ElementRef, markup: &str);

    // Mutation

    fn set_class(&self, element: &ElementRef, class: &str, on: bool);
    fn set_attribute(&self, element: &ElementRef, name: &str, value: &str);
    /// Replace an element's inner content.
    fn set_content(&self, element: &ElementRef, content: &str);
    fn set_visible(&self, element: &ElementRef, visible: bool);
    fn set_opacity(&self, element: &ElementRef, opacity: f64);

    // Geometry

    /// Natural (content) height of an element.
    fn measure_height(&self, element: &ElementRef) -> f64;
    /// Pin an element to a fixed pixel height.
    fn fix_height(&self, element: &ElementRef, height: f64);
    /// Release a pinned height back to automatic sizing.
    fn release_height(&self, element: &ElementRef);
    /// Vertical page offset of an element, for scroll-to-group.
    fn offset_top(&self, element: &ElementRef) -> f64;
}
