//! Pane data structure

use tabkit_dom::ElementRef;

/// Where a pane's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneKind {
    /// Content present in the document at initialization.
    Local,
    /// Content fetched on demand from a URL.
    Remote { url: String },
}

/// One unit of tabbed content, shown and hidden as a whole.
#[derive(Debug, Clone)]
pub struct Pane {
    /// Stable selector key: a native fragment id, or a synthesized
    /// ajax-pane id. Unique within the group.
    pub identity: String,
    pub kind: PaneKind,
    pub element: ElementRef,
    /// True once remote content has been fetched at least once.
    /// Local panes are born loaded.
    pub loaded: bool,
    /// True for exactly one pane per group at any settled moment.
    pub visible: bool,
}

impl Pane {
    pub fn local(identity: String, element: ElementRef) -> Self {
        Self {
            identity,
            kind: PaneKind::Local,
            element,
            loaded: true,
            visible: false,
        }
    }

    pub fn remote(identity: String, url: String, element: ElementRef) -> Self {
        Self {
            identity,
            kind: PaneKind::Remote { url },
            element,
            loaded: false,
            visible: false,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.kind, PaneKind::Remote { .. })
    }

    /// Source URL for remote panes.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            PaneKind::Remote { url } => Some(url.as_str()),
            PaneKind::Local => None,
        }
    }

    /// Whether activating this pane must go through the content loader.
    pub fn needs_fetch(&self, reload_ajax: bool) -> bool {
        self.is_remote() && (reload_ajax || !self.loaded)
    }
}
