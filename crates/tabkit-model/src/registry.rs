//! Page-wide group registry
//!
//! Owned by the bootstrap layer and injected where resolution is needed;
//! never ambient state.

use crate::group::GroupHandle;
use crate::nav::NavHref;
use crate::pane::PaneKind;

/// Ordered set of the page's initialized tab groups.
#[derive(Default)]
pub struct Registry {
    groups: Vec<GroupHandle>,
}

impl Registry {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a group; registration order is resolution order.
    pub fn register(&mut self, group: GroupHandle) {
        self.groups.push(group);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = &GroupHandle> {
        self.groups.iter()
    }

    /// Find a group by its id.
    pub fn find(&self, group_id: &str) -> Option<GroupHandle> {
        self.groups
            .iter()
            .find(|g| g.read().id == group_id)
            .cloned()
    }

    /// Resolve an external selector to the owning group and pane.
    ///
    /// The selector is a URL-fragment-like string, with or without the
    /// leading `#`. Groups are scanned in registration order; within a
    /// group, native fragment identities are checked before synthetic
    /// ajax ids. A miss returns `None` - an unrelated page fragment is
    /// not an error.
    pub fn resolve(&self, selector: &str) -> Option<(GroupHandle, usize)> {
        let key = selector.strip_prefix('#').unwrap_or(selector);
        if key.is_empty() {
            return None;
        }

        for handle in &self.groups {
            let group = handle.read();

            if let Some(index) = group
                .panes
                .iter()
                .position(|p| p.kind == PaneKind::Local && p.identity == key)
            {
                return Some((handle.clone(), index));
            }

            if let Some(index) = group.nav_items.iter().position(|n| {
                matches!(&n.href, NavHref::External { tab_id, .. } if tab_id.as_str() == key)
            }) {
                return Some((handle.clone(), index));
            }
        }

        None
    }
}
