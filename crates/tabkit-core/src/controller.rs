//! Tabs controller
//!
//! The page-level entry point: owns the registry, builds groups from
//! roots, and routes both kinds of selection event (nav click, fragment
//! change) into the transition engine.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use tabkit_dom::{Animator, DocumentAdapter, ElementRef};
use tabkit_engine::{Activation, TabChangeHook, TransitionEngine};
use tabkit_loader::ContentLoader;
use tabkit_model::{GroupHandle, Registry, TabsConfig};

use crate::init::{build_group, SyntheticIds};
use crate::Result;

/// What the caller should do with the click's default navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    /// The link belongs to a known group; suppress default navigation.
    Suppress,
    /// Not ours; let the browser navigate.
    Default,
}

pub struct Tabs {
    doc: Arc<dyn DocumentAdapter>,
    engine: TransitionEngine,
    registry: RwLock<Registry>,
    config: TabsConfig,
    synthetic: Mutex<SyntheticIds>,
}

impl Tabs {
    pub fn new(
        doc: Arc<dyn DocumentAdapter>,
        animator: Arc<dyn Animator>,
        loader: Arc<dyn ContentLoader>,
        config: TabsConfig,
    ) -> Self {
        let engine = TransitionEngine::new(doc.clone(), animator, loader);
        Self {
            doc,
            engine,
            registry: RwLock::new(Registry::new()),
            config,
            synthetic: Mutex::new(SyntheticIds::new()),
        }
    }

    /// Install the per-transition notification callback.
    pub fn with_tab_change_hook(mut self, hook: TabChangeHook) -> Self {
        self.engine.set_tab_change_hook(hook);
        self
    }

    /// Build and register one group per root element.
    ///
    /// All-or-nothing: a validation failure in any root registers no
    /// group at all. Returns the new group ids in root order.
    pub fn initialize(&self, roots: &[ElementRef]) -> Result<Vec<String>> {
        let mut groups = Vec::with_capacity(roots.len());
        {
            let mut synth = self.synthetic.lock();
            for root in roots {
                groups.push(build_group(self.doc.as_ref(), root, &self.config, &mut synth)?);
            }
        }

        let mut registry = self.registry.write();
        let mut ids = Vec::with_capacity(groups.len());
        for group in groups {
            ids.push(group.id.clone());
            registry.register(group.into_handle());
        }
        Ok(ids)
    }

    /// Activate the pane a selector refers to.
    ///
    /// The selector is a URL-fragment-like string, native or synthetic.
    /// An unknown selector is a silent no-op, not an error.
    pub async fn select(&self, selector: &str) -> Result<Option<Activation>> {
        let resolved = self.registry.read().resolve(selector);
        match resolved {
            Some((group, index)) => Ok(Some(self.engine.activate(&group, index).await?)),
            None => {
                tracing::debug!(selector = %selector, "Selector matched no tab group");
                Ok(None)
            }
        }
    }

    /// Route a location-fragment change into selection. The initial page
    /// load with a non-empty fragment goes through here as well.
    pub async fn on_fragment_change(&self, fragment: &str) -> Result<Option<Activation>> {
        self.select(fragment).await
    }

    /// Handle a click on a nav item: activate its pane directly,
    /// bypassing the registry scan. Clicks on links outside any known
    /// group keep their default navigation.
    pub async fn click(&self, group_id: &str, nav_index: usize) -> Result<ClickDisposition> {
        let found = self.registry.read().find(group_id);
        let Some(group) = found else {
            return Ok(ClickDisposition::Default);
        };
        self.engine.activate(&group, nav_index).await?;
        Ok(ClickDisposition::Suppress)
    }

    /// Re-pin every container to its active pane's current height.
    /// Run after full page load, once late-loading assets have settled
    /// the layout.
    pub fn refresh_heights(&self) {
        let registry = self.registry.read();
        for handle in registry.groups() {
            let group = handle.read();
            let active = &group.panes[group.active_pane()];
            self.doc
                .fix_height(&group.container, self.doc.measure_height(&active.element));
        }
    }

    pub fn group(&self, group_id: &str) -> Option<GroupHandle> {
        self.registry.read().find(group_id)
    }

    pub fn group_count(&self) -> usize {
        self.registry.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabkit_dom::{InstantAnimator, MemoryDocument};
    use tabkit_loader::StaticLoader;

    fn controller(doc: &Arc<MemoryDocument>, config: TabsConfig) -> Tabs {
        let adapter: Arc<dyn DocumentAdapter> = doc.clone();
        Tabs::new(
            adapter.clone(),
            Arc::new(InstantAnimator::new(adapter)),
            Arc::new(StaticLoader::new().with("https://example.com/extra", "<p>extra</p>")),
            config,
        )
    }

    fn local_root(doc: &MemoryDocument, fragments: &[&str]) -> ElementRef {
        let root = doc.create_root();
        for f in fragments {
            doc.add_nav_link(&root, &format!("#{f}"), &f.to_uppercase());
        }
        for f in fragments {
            doc.add_pane(&root, Some(f));
        }
        root
    }

    #[tokio::test]
    async fn test_select_activates_and_is_idempotent() {
        let doc = Arc::new(MemoryDocument::new());
        let root = local_root(&doc, &["a", "b"]);
        let tabs = controller(&doc, TabsConfig::default());
        let ids = tabs.initialize(&[root]).unwrap();
        assert_eq!(ids.len(), 1);

        let outcome = tabs.select("#b").await.unwrap();
        assert_eq!(outcome, Some(Activation::Completed));

        let group = tabs.group(&ids[0]).unwrap();
        assert_eq!(group.read().active_pane(), 1);
        assert!(group.read().is_settled());

        // Re-selecting the active pane changes nothing.
        let outcome = tabs.select("#b").await.unwrap();
        assert_eq!(outcome, Some(Activation::AlreadyActive));
    }

    #[tokio::test]
    async fn test_unknown_selector_is_silent_noop() {
        let doc = Arc::new(MemoryDocument::new());
        let root = local_root(&doc, &["a", "b"]);
        let tabs = controller(&doc, TabsConfig::default());
        let ids = tabs.initialize(&[root]).unwrap();

        assert_eq!(tabs.select("#zzz").await.unwrap(), None);
        assert_eq!(tabs.on_fragment_change("#zzz").await.unwrap(), None);

        let group = tabs.group(&ids[0]).unwrap();
        assert_eq!(group.read().active_pane(), 0);
    }

    #[tokio::test]
    async fn test_resolution_across_groups() {
        let doc = Arc::new(MemoryDocument::new());
        let root1 = local_root(&doc, &["a", "b"]);
        let root2 = doc.create_root();
        doc.add_nav_link(&root2, "https://example.com/extra", "Extra");
        doc.add_nav_link(&root2, "https://example.com/extra", "Extra 2");

        let tabs = controller(&doc, TabsConfig::default());
        let ids = tabs.initialize(&[root1, root2]).unwrap();
        assert_eq!(ids.len(), 2);

        // Native fragment hits the first group.
        tabs.select("#b").await.unwrap();
        assert_eq!(tabs.group(&ids[0]).unwrap().read().active_pane(), 1);

        // Synthetic id, no hash prefix, hits the second group.
        let g2 = tabs.group(&ids[1]).unwrap();
        let second_id = g2.read().panes[1].identity.clone();
        let outcome = tabs.select(&second_id).await.unwrap();
        assert_eq!(outcome, Some(Activation::Completed));
        assert_eq!(g2.read().active_pane(), 1);
        assert!(g2.read().panes[1].loaded);
        assert_eq!(doc.content(&g2.read().panes[1].element), "<p>extra</p>");
    }

    #[tokio::test]
    async fn test_click_dispositions() {
        let doc = Arc::new(MemoryDocument::new());
        let root = local_root(&doc, &["a", "b"]);
        let tabs = controller(&doc, TabsConfig::default());
        let ids = tabs.initialize(&[root]).unwrap();

        let disposition = tabs.click(&ids[0], 1).await.unwrap();
        assert_eq!(disposition, ClickDisposition::Suppress);
        assert_eq!(tabs.group(&ids[0]).unwrap().read().active_pane(), 1);

        // A link with no configured group keeps default navigation.
        let disposition = tabs.click("group-unknown", 0).await.unwrap();
        assert_eq!(disposition, ClickDisposition::Default);
    }

    #[tokio::test]
    async fn test_initialize_is_all_or_nothing() {
        let doc = Arc::new(MemoryDocument::new());
        let good = local_root(&doc, &["a"]);
        let empty = doc.create_root();

        let tabs = controller(&doc, TabsConfig::default());
        assert!(tabs.initialize(&[good, empty]).is_err());
        assert_eq!(tabs.group_count(), 0);
    }

    #[tokio::test]
    async fn test_hook_wired_through_select() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let doc = Arc::new(MemoryDocument::new());
        let root = local_root(&doc, &["a", "b"]);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let tabs = controller(&doc, TabsConfig::default()).with_tab_change_hook(Arc::new(
            move |_, index| {
                assert_eq!(index, 1);
                counter.fetch_add(1, Ordering::SeqCst);
            },
        ));
        tabs.initialize(&[root]).unwrap();

        tabs.select("#b").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Idempotent re-select does not fire the hook again.
        tabs.select("#b").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_heights_repins_active_pane() {
        let doc = Arc::new(MemoryDocument::new());
        let root = local_root(&doc, &["a", "b"]);
        let tabs = controller(&doc, TabsConfig::default());
        let ids = tabs.initialize(&[root]).unwrap();

        let group = tabs.group(&ids[0]).unwrap();
        let (container, active_el) = {
            let g = group.read();
            (g.container, g.panes[0].element)
        };

        // Images finished loading, the pane grew.
        doc.set_measured_height(&active_el, 300.0);
        tabs.refresh_heights();
        assert_eq!(doc.fixed_height(&container), Some(300.0));
    }
}
