//! In-memory document
//!
//! A complete `DocumentAdapter` backed by plain maps, playing the role a
//! real page plays in production. Tests across the workspace build their
//! fixture markup through this type and assert on the visual state the
//! engine leaves behind.

use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::document::DocumentAdapter;
use crate::element::{ElementRef, NavLink, PaneElement};

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    content: String,
    hidden: bool,
    opacity: Option<f64>,
    measured_height: f64,
    fixed_height: Option<f64>,
    offset_top: f64,
    appended: Vec<String>,
}

#[derive(Debug, Default)]
struct RootState {
    nav_links: Vec<ElementRef>,
    panes: Vec<ElementRef>,
    container: Option<ElementRef>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    elements: HashMap<ElementRef, ElementState>,
    roots: HashMap<ElementRef, RootState>,
}

impl Inner {
    fn create_element(&mut self) -> ElementRef {
        self.next_id += 1;
        let el = ElementRef::new(self.next_id);
        self.elements.insert(el, ElementState::default());
        el
    }

    fn element(&mut self, el: &ElementRef) -> &mut ElementState {
        self.elements.entry(*el).or_default()
    }
}

pub struct MemoryDocument {
    inner: Mutex<Inner>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Create a group root, the element a tab component is mounted on.
    pub fn create_root(&self) -> ElementRef {
        let mut inner = self.inner.lock();
        let root = inner.create_element();
        inner.roots.insert(root, RootState::default());
        root
    }

    /// Append a nav anchor to the root's nav list.
    pub fn add_nav_link(&self, root: &ElementRef, href: &str, label: &str) -> ElementRef {
        let mut inner = self.inner.lock();
        let el = inner.create_element();
        let state = inner.element(&el);
        state.attributes.insert("href".to_string(), href.to_string());
        state.content = label.to_string();
        if let Some(r) = inner.roots.get_mut(root) {
            r.nav_links.push(el);
        }
        el
    }

    /// Append a content pane to the root, optionally carrying an id.
    pub fn add_pane(&self, root: &ElementRef, fragment_id: Option<&str>) -> ElementRef {
        let mut inner = self.inner.lock();
        let el = inner.create_element();
        if let Some(id) = fragment_id {
            inner
                .element(&el)
                .attributes
                .insert("id".to_string(), id.to_string());
        }
        if let Some(r) = inner.roots.get_mut(root) {
            r.panes.push(el);
        }
        el
    }

    /// Fix the height `measure_height` reports for an element.
    pub fn set_measured_height(&self, element: &ElementRef, height: f64) {
        self.inner.lock().element(element).measured_height = height;
    }

    /// Fix the page offset `offset_top` reports for an element.
    pub fn set_offset_top(&self, element: &ElementRef, offset: f64) {
        self.inner.lock().element(element).offset_top = offset;
    }

    // Inspection, for assertions.

    pub fn has_class(&self, element: &ElementRef, class: &str) -> bool {
        self.inner
            .lock()
            .elements
            .get(element)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    pub fn attribute(&self, element: &ElementRef, name: &str) -> Option<String> {
        self.inner
            .lock()
            .elements
            .get(element)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    pub fn content(&self, element: &ElementRef) -> String {
        self.inner
            .lock()
            .elements
            .get(element)
            .map(|e| e.content.clone())
            .unwrap_or_default()
    }

    pub fn is_visible(&self, element: &ElementRef) -> bool {
        self.inner
            .lock()
            .elements
            .get(element)
            .map(|e| !e.hidden)
            .unwrap_or(false)
    }

    /// Effective opacity; elements start fully opaque.
    pub fn opacity(&self, element: &ElementRef) -> f64 {
        self.inner
            .lock()
            .elements
            .get(element)
            .and_then(|e| e.opacity)
            .unwrap_or(1.0)
    }

    pub fn fixed_height(&self, element: &ElementRef) -> Option<f64> {
        self.inner
            .lock()
            .elements
            .get(element)
            .and_then(|e| e.fixed_height)
    }

    /// Markup fragments appended into an element, oldest first.
    pub fn appended_markup(&self, element: &ElementRef) -> Vec<String> {
        self.inner
            .lock()
            .elements
            .get(element)
            .map(|e| e.appended.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAdapter for MemoryDocument {
    fn nav_links(&self, root: &ElementRef) -> Vec<NavLink> {
        let inner = self.inner.lock();
        let Some(r) = inner.roots.get(root) else {
            return Vec::new();
        };
        r.nav_links
            .iter()
            .filter_map(|el| {
                let state = inner.elements.get(el)?;
                Some(NavLink {
                    element: *el,
                    href: state.attributes.get("href").cloned().unwrap_or_default(),
                    label: state.content.clone(),
                    attributes: state
                        .attributes
                        .iter()
                        .filter(|(k, _)| k.as_str() != "href")
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                })
            })
            .collect()
    }

    fn pane_elements(&self, root: &ElementRef) -> Vec<PaneElement> {
        let inner = self.inner.lock();
        let Some(r) = inner.roots.get(root) else {
            return Vec::new();
        };
        r.panes
            .iter()
            .map(|el| PaneElement {
                element: *el,
                fragment_id: inner
                    .elements
                    .get(el)
                    .and_then(|e| e.attributes.get("id").cloned()),
            })
            .collect()
    }

    fn wrap_panes(&self, root: &ElementRef, class: &str) -> ElementRef {
        let mut inner = self.inner.lock();
        if let Some(existing) = inner.roots.get(root).and_then(|r| r.container) {
            return existing;
        }
        let container = inner.create_element();
        inner.element(&container).classes.insert(class.to_string());
        if let Some(r) = inner.roots.get_mut(root) {
            r.container = Some(container);
        }
        container
    }

    fn insert_placeholder(&self, root: &ElementRef, class: &str, identity: &str) -> ElementRef {
        let mut inner = self.inner.lock();
        let el = inner.create_element();
        let state = inner.element(&el);
        state.classes.insert(class.to_string());
        state
            .attributes
            .insert("id".to_string(), identity.to_string());
        if let Some(r) = inner.roots.get_mut(root) {
            r.panes.push(el);
        }
        el
    }

    fn append_markup(&self, element: &ElementRef, markup: &str) {
        self.inner
            .lock()
            .element(element)
            .appended
            .push(markup.to_string());
    }

    fn set_class(&self, element: &ElementRef, class: &str, on: bool) {
        let mut inner = self.inner.lock();
        let state = inner.element(element);
        if on {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn set_attribute(&self, element: &ElementRef, name: &str, value: &str) {
        self.inner
            .lock()
            .element(element)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_content(&self, element: &ElementRef, content: &str) {
        self.inner.lock().element(element).content = content.to_string();
    }

    fn set_visible(&self, element: &ElementRef, visible: bool) {
        self.inner.lock().element(element).hidden = !visible;
    }

    fn set_opacity(&self, element: &ElementRef, opacity: f64) {
        self.inner.lock().element(element).opacity = Some(opacity);
    }

    fn measure_height(&self, element: &ElementRef) -> f64 {
        self.inner
            .lock()
            .elements
            .get(element)
            .map(|e| e.measured_height)
            .unwrap_or(0.0)
    }

    fn fix_height(&self, element: &ElementRef, height: f64) {
        self.inner.lock().element(element).fixed_height = Some(height);
    }

    fn release_height(&self, element: &ElementRef) {
        self.inner.lock().element(element).fixed_height = None;
    }

    fn offset_top(&self, element: &ElementRef) -> f64 {
        self.inner
            .lock()
            .elements
            .get(element)
            .map(|e| e.offset_top)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_preserves_document_order() {
        let doc = MemoryDocument::new();
        let root = doc.create_root();
        doc.add_nav_link(&root, "#a", "A");
        doc.add_nav_link(&root, "https://example.com/b", "B");
        doc.add_pane(&root, Some("a"));

        let links = doc.nav_links(&root);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "#a");
        assert_eq!(links[0].label, "A");
        assert!(!links[1].is_local_anchor());

        let panes = doc.pane_elements(&root);
        assert_eq!(panes.len(), 1);
        assert_eq!(panes[0].fragment_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_placeholder_lands_after_existing_panes() {
        let doc = MemoryDocument::new();
        let root = doc.create_root();
        doc.add_pane(&root, Some("a"));
        let placeholder = doc.insert_placeholder(&root, "tab-ajax", "tab-beef-1");

        let panes = doc.pane_elements(&root);
        assert_eq!(panes.len(), 2);
        assert_eq!(panes[1].element, placeholder);
        assert_eq!(panes[1].fragment_id.as_deref(), Some("tab-beef-1"));
        assert!(doc.has_class(&placeholder, "tab-ajax"));
    }

    #[test]
    fn test_wrap_panes_is_idempotent() {
        let doc = MemoryDocument::new();
        let root = doc.create_root();
        let first = doc.wrap_panes(&root, "container");
        let second = doc.wrap_panes(&root, "container");
        assert_eq!(first, second);
        assert!(doc.has_class(&first, "container"));
    }

    #[test]
    fn test_class_and_visibility_mutation() {
        let doc = MemoryDocument::new();
        let root = doc.create_root();
        let link = doc.add_nav_link(&root, "#a", "A");

        doc.set_class(&link, "active", true);
        assert!(doc.has_class(&link, "active"));
        doc.set_class(&link, "active", false);
        assert!(!doc.has_class(&link, "active"));

        let pane = doc.add_pane(&root, Some("a"));
        assert!(doc.is_visible(&pane));
        doc.set_visible(&pane, false);
        assert!(!doc.is_visible(&pane));
    }

    #[test]
    fn test_height_pin_and_release() {
        let doc = MemoryDocument::new();
        let root = doc.create_root();
        let container = doc.wrap_panes(&root, "container");

        doc.fix_height(&container, 120.0);
        assert_eq!(doc.fixed_height(&container), Some(120.0));
        doc.release_height(&container);
        assert_eq!(doc.fixed_height(&container), None);
    }
}
