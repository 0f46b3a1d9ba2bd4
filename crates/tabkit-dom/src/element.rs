//! Opaque element handles and discovery records

/// Handle to one element in the host document.
///
/// The value is meaningful only to the adapter that issued it; the rest of
/// the workspace treats it as an opaque key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(u64);

impl ElementRef {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// One anchor discovered inside a group's nav list, in document order.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub element: ElementRef,
    /// Raw href as written in the markup: `#fragment` or an external URL.
    pub href: String,
    /// Rendered label, reused verbatim for pagination links.
    pub label: String,
    /// Attributes other than `href`, also copied into pagination links.
    pub attributes: Vec<(String, String)>,
}

impl NavLink {
    /// An in-page anchor selects a pane already present in the document.
    pub fn is_local_anchor(&self) -> bool {
        self.href.starts_with('#')
    }

    /// Fragment part of a local anchor, without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|f| !f.is_empty())
    }
}

/// One content pane discovered under a group root, in document order.
#[derive(Debug, Clone)]
pub struct PaneElement {
    pub element: ElementRef,
    /// The element's own id, if the markup carries one.
    pub fragment_id: Option<String>,
}
