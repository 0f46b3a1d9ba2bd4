//! Group discovery and initialization
//!
//! Builds one `TabGroup` from a root element's markup: pairs nav links
//! with panes by position, materializes placeholder panes for ajax
//! links, wraps everything in the height-animated container, and renders
//! pagination. Validation failures are fatal here; nothing half-built
//! escapes.

use tabkit_dom::{DocumentAdapter, ElementRef};
use tabkit_model::{build_pagination, GroupError, NavHref, NavItem, Pane, TabGroup, TabsConfig};

use crate::markup::render_pagination;
use crate::Result;

/// Generator for ajax pane identities: `tab-<random4>-<counter>`.
/// One random prefix per controller, counter shared across its groups.
pub(crate) struct SyntheticIds {
    prefix: String,
    counter: u64,
}

impl SyntheticIds {
    pub(crate) fn new() -> Self {
        let prefix = uuid::Uuid::new_v4().simple().to_string()[..4].to_string();
        Self { prefix, counter: 0 }
    }

    pub(crate) fn next(&mut self) -> String {
        self.counter += 1;
        format!("tab-{}-{}", self.prefix, self.counter)
    }
}

/// Discover and assemble the group under `root`. Does not register it.
pub(crate) fn build_group(
    doc: &dyn DocumentAdapter,
    root: &ElementRef,
    config: &TabsConfig,
    synth: &mut SyntheticIds,
) -> Result<TabGroup> {
    let group_id = format!("group-{}", root.id());
    let links = doc.nav_links(root);
    let existing = doc.pane_elements(root);

    if links.is_empty() {
        return Err(GroupError::EmptyGroup(group_id).into());
    }

    let mut panes: Vec<Pane> = Vec::with_capacity(links.len());
    let mut nav_items: Vec<NavItem> = Vec::with_capacity(links.len());
    let mut local_panes = existing.iter();
    let mut locals_used = 0usize;

    for (index, link) in links.iter().enumerate() {
        let (pane, href) = if link.is_local_anchor() {
            let Some(found) = local_panes.next() else {
                return Err(GroupError::CountMismatch {
                    group: group_id,
                    nav_items: links.len(),
                    panes: existing.len(),
                }
                .into());
            };
            locals_used += 1;
            // The pane's own id wins; a pane without one inherits the
            // anchor's fragment.
            let identity = found
                .fragment_id
                .clone()
                .or_else(|| link.fragment().map(str::to_string))
                .unwrap_or_else(|| synth.next());
            (
                Pane::local(identity.clone(), found.element),
                NavHref::Fragment(identity),
            )
        } else {
            let identity = synth.next();
            let element = doc.insert_placeholder(root, &config.ajax_container_class, &identity);
            doc.set_attribute(&link.element, "data-tab-id", &identity);
            (
                Pane::remote(identity.clone(), link.href.clone(), element),
                NavHref::External {
                    url: link.href.clone(),
                    tab_id: identity,
                },
            )
        };

        doc.set_class(&pane.element, &config.tab_class, true);
        nav_items.push(NavItem {
            index,
            target_identity: pane.identity.clone(),
            href,
            label: link.label.clone(),
            attributes: link.attributes.clone(),
            element: link.element,
            is_active: false,
        });
        panes.push(pane);
    }

    if locals_used < existing.len() {
        return Err(GroupError::CountMismatch {
            group: group_id,
            nav_items: links.len(),
            panes: existing.len(),
        }
        .into());
    }

    // Wrap the panes, show only the first, pin the container to its
    // height, mark the first nav item active.
    let container = doc.wrap_panes(root, &config.container_class);
    for (i, pane) in panes.iter().enumerate() {
        doc.set_visible(&pane.element, i == 0);
    }
    doc.fix_height(&container, doc.measure_height(&panes[0].element));
    for (i, item) in nav_items.iter().enumerate() {
        doc.set_class(&item.element, &config.active_class, i == 0);
    }

    let group = TabGroup::new(group_id, *root, container, panes, nav_items, config.clone())?;

    if config.pagination {
        let pagination = build_pagination(&group);
        for (pane, links) in group.panes.iter().zip(pagination.iter()) {
            let html = render_pagination(links, &config.pagination_config);
            if !html.is_empty() {
                doc.append_markup(&pane.element, &html);
            }
        }
    }

    tracing::info!(
        group_id = %group.id,
        panes = group.len(),
        "Initialized tab group"
    );
    Ok(group)
}
