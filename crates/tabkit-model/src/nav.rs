//! Nav item data structure

use tabkit_dom::ElementRef;

/// What a nav item's anchor points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavHref {
    /// In-page anchor to a local pane, stored without the `#`.
    Fragment(String),
    /// External content URL plus the synthetic id written onto the link
    /// as `data-tab-id`.
    External { url: String, tab_id: String },
}

impl NavHref {
    /// Href usable in generated pagination markup. Both kinds resolve to
    /// an in-page `#` reference, since the placeholder pane exists in the
    /// document by the time pagination renders.
    pub fn resolved(&self) -> String {
        match self {
            NavHref::Fragment(fragment) => format!("#{fragment}"),
            NavHref::External { tab_id, .. } => format!("#{tab_id}"),
        }
    }
}

/// One entry in the group's nav list, paired with the pane at the same
/// position.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub index: usize,
    /// Identity of the pane this item activates.
    pub target_identity: String,
    pub href: NavHref,
    /// Rendered label, copied into pagination links.
    pub label: String,
    /// Markup attributes, copied into pagination links.
    pub attributes: Vec<(String, String)>,
    pub element: ElementRef,
    /// Mirrors whether the paired pane is the group's active pane.
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_href() {
        let local = NavHref::Fragment("details".to_string());
        assert_eq!(local.resolved(), "#details");

        let remote = NavHref::External {
            url: "https://example.com/pane".to_string(),
            tab_id: "tab-beef-2".to_string(),
        };
        assert_eq!(remote.resolved(), "#tab-beef-2");
    }
}
