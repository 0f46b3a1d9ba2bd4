//! Pagination derivation
//!
//! Pure function of group state: each pane gets a prev link to its left
//! neighbor and a next link to its right neighbor, labels and attributes
//! copied from the neighbor's nav item. Derived once at initialization;
//! group structure never changes afterwards.

use crate::group::TabGroup;

/// One generated prev/next link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// In-page href: `#<fragment>` or `#<data-tab-id>`.
    pub href: String,
    /// Label copied from the neighbor nav item.
    pub label: String,
    /// Neighbor nav attributes plus configured extras.
    pub attributes: Vec<(String, String)>,
}

/// Pagination links for one pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanePagination {
    pub prev: Option<PageLink>,
    pub next: Option<PageLink>,
}

fn link_to(group: &TabGroup, index: usize) -> PageLink {
    let item = &group.nav_items[index];
    let mut attributes = item.attributes.clone();
    attributes.extend(group.config.pagination_config.extra_attributes.iter().cloned());
    PageLink {
        href: item.href.resolved(),
        label: item.label.clone(),
        attributes,
    }
}

/// Derive pagination for every pane, in pane order.
pub fn build_pagination(group: &TabGroup) -> Vec<PanePagination> {
    let n = group.panes.len();
    (0..n)
        .map(|i| PanePagination {
            prev: (i > 0).then(|| link_to(group, i - 1)),
            next: (i + 1 < n).then(|| link_to(group, i + 1)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PaginationConfig, TabsConfig};
    use crate::nav::{NavHref, NavItem};
    use crate::pane::Pane;
    use tabkit_dom::ElementRef;

    fn group_of(n: usize, config: TabsConfig) -> TabGroup {
        let panes = (0..n)
            .map(|i| Pane::local(format!("p{i}"), ElementRef::new(10 + i as u64)))
            .collect();
        let nav_items = (0..n)
            .map(|i| NavItem {
                index: i,
                target_identity: format!("p{i}"),
                href: NavHref::Fragment(format!("p{i}")),
                label: format!("Tab {i}"),
                attributes: vec![("title".to_string(), format!("tab {i}"))],
                element: ElementRef::new(100 + i as u64),
                is_active: false,
            })
            .collect();
        TabGroup::new(
            "g".to_string(),
            ElementRef::new(1),
            ElementRef::new(2),
            panes,
            nav_items,
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_three_pane_shape() {
        let group = group_of(3, TabsConfig::default());
        let pagination = build_pagination(&group);

        assert!(pagination[0].prev.is_none());
        assert_eq!(pagination[0].next.as_ref().unwrap().href, "#p1");

        assert_eq!(pagination[1].prev.as_ref().unwrap().href, "#p0");
        assert_eq!(pagination[1].next.as_ref().unwrap().href, "#p2");

        assert_eq!(pagination[2].prev.as_ref().unwrap().href, "#p1");
        assert!(pagination[2].next.is_none());
    }

    #[test]
    fn test_labels_and_attributes_copied_from_neighbor() {
        let group = group_of(2, TabsConfig::default());
        let pagination = build_pagination(&group);

        let next = pagination[0].next.as_ref().unwrap();
        assert_eq!(next.label, "Tab 1");
        assert_eq!(next.attributes, vec![("title".to_string(), "tab 1".to_string())]);
    }

    #[test]
    fn test_extra_attributes_appended() {
        let config = TabsConfig {
            pagination: true,
            pagination_config: PaginationConfig {
                extra_attributes: vec![("rel".to_string(), "pagination".to_string())],
                ..PaginationConfig::default()
            },
            ..TabsConfig::default()
        };
        let group = group_of(2, config);
        let pagination = build_pagination(&group);

        let prev = pagination[1].prev.as_ref().unwrap();
        assert!(prev
            .attributes
            .contains(&("rel".to_string(), "pagination".to_string())));
    }

    #[test]
    fn test_single_pane_has_no_links() {
        let group = group_of(1, TabsConfig::default());
        let pagination = build_pagination(&group);
        assert_eq!(pagination, vec![PanePagination::default()]);
    }

    #[test]
    fn test_synthetic_neighbor_resolves_to_tab_id() {
        let panes = vec![
            Pane::local("a".to_string(), ElementRef::new(10)),
            Pane::remote(
                "tab-beef-1".to_string(),
                "https://example.com/b".to_string(),
                ElementRef::new(11),
            ),
        ];
        let nav_items = vec![
            NavItem {
                index: 0,
                target_identity: "a".to_string(),
                href: NavHref::Fragment("a".to_string()),
                label: "A".to_string(),
                attributes: Vec::new(),
                element: ElementRef::new(100),
                is_active: false,
            },
            NavItem {
                index: 1,
                target_identity: "tab-beef-1".to_string(),
                href: NavHref::External {
                    url: "https://example.com/b".to_string(),
                    tab_id: "tab-beef-1".to_string(),
                },
                label: "B".to_string(),
                attributes: Vec::new(),
                element: ElementRef::new(101),
                is_active: false,
            },
        ];
        let group = TabGroup::new(
            "g".to_string(),
            ElementRef::new(1),
            ElementRef::new(2),
            panes,
            nav_items,
            TabsConfig::default(),
        )
        .unwrap();

        let pagination = build_pagination(&group);
        assert_eq!(pagination[0].next.as_ref().unwrap().href, "#tab-beef-1");
    }
}
