//! Transition engine
//!
//! One `activate` call is a linear asynchronous pipeline over the
//! animator and loader collaborators. The group's generation counter is
//! sampled when the run is accepted and re-checked after every await;
//! once a newer run has been accepted, the older run stops touching the
//! document and reports `Superseded`.

use std::sync::Arc;
use std::time::Duration;

use tabkit_dom::{Animator, DocumentAdapter, ElementRef};
use tabkit_loader::{CachePolicy, ContentLoader};
use tabkit_model::{ActivationTicket, GroupHandle, TabsConfig};

use crate::Result;

/// Outcome of one activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The full protocol ran and the group is settled on the target.
    Completed,
    /// The target was already active; nothing happened.
    AlreadyActive,
    /// A newer activation took over before this one settled.
    Superseded,
}

/// Invoked once per transition, after the target pane becomes visible and
/// before the container resize. Receives the group id and target index.
pub type TabChangeHook = Arc<dyn Fn(&str, usize) + Send + Sync>;

/// Everything a run needs outside the group lock, captured when the run
/// is accepted.
struct RunContext {
    group_id: String,
    config: TabsConfig,
    root: ElementRef,
    container: ElementRef,
    outgoing_nav: ElementRef,
    target_nav: ElementRef,
    target_pane: ElementRef,
    /// The pane that is actually showing when the run starts. Distinct
    /// from the ticket's outgoing index: under supersession the
    /// previous run may not have gotten as far as hiding anything.
    visible_pane: Option<ElementRef>,
    duration: Duration,
}

pub struct TransitionEngine {
    doc: Arc<dyn DocumentAdapter>,
    animator: Arc<dyn Animator>,
    loader: Arc<dyn ContentLoader>,
    on_tab_change: Option<TabChangeHook>,
}

impl TransitionEngine {
    pub fn new(
        doc: Arc<dyn DocumentAdapter>,
        animator: Arc<dyn Animator>,
        loader: Arc<dyn ContentLoader>,
    ) -> Self {
        Self {
            doc,
            animator,
            loader,
            on_tab_change: None,
        }
    }

    pub fn set_tab_change_hook(&mut self, hook: TabChangeHook) {
        self.on_tab_change = Some(hook);
    }

    pub fn with_tab_change_hook(mut self, hook: TabChangeHook) -> Self {
        self.set_tab_change_hook(hook);
        self
    }

    fn still_current(&self, group: &GroupHandle, ticket: &ActivationTicket) -> bool {
        let current = group.read().is_current(ticket.generation);
        if !current {
            tracing::debug!(
                generation = ticket.generation,
                target = ticket.target,
                "Stale transition stage discarded"
            );
        }
        current
    }

    /// Run the activation protocol for `target` within `group`.
    ///
    /// Re-selecting the active pane is an idempotent no-op. An
    /// out-of-bounds target is an error. A failed remote fetch is
    /// reported and the transition settles with whatever content the
    /// pane has.
    pub async fn activate(&self, group: &GroupHandle, target: usize) -> Result<Activation> {
        // Stage 1: accept the run, swap nav state, move the active index.
        // All under one write lock, so rapid repeated selections resolve
        // against the newest target.
        let (ticket, run) = {
            let mut g = group.write();
            let Some(ticket) = g.begin_activation(target)? else {
                return Ok(Activation::AlreadyActive);
            };
            let run = RunContext {
                group_id: g.id.clone(),
                config: g.config.clone(),
                root: g.root,
                container: g.container,
                outgoing_nav: g.nav_items[ticket.outgoing].element,
                target_nav: g.nav_items[ticket.target].element,
                target_pane: g.panes[ticket.target].element,
                visible_pane: g.panes.iter().find(|p| p.visible).map(|p| p.element),
                duration: g.config.animation_duration(),
            };
            (ticket, run)
        };
        self.doc
            .set_class(&run.outgoing_nav, &run.config.active_class, false);
        self.doc
            .set_class(&run.target_nav, &run.config.active_class, true);

        // Stage 2: kick off the scroll without gating the pipeline on it.
        if run.config.scroll_to {
            let animator = self.animator.clone();
            let offset = self.doc.offset_top(&run.root) + run.config.scroll_to_offset;
            let duration = run.duration;
            tokio::spawn(async move {
                animator.scroll_to(offset, duration).await;
            });
        }

        // Stage 3: fade out whatever is showing, hide it, and pin the
        // container to its height so the layout doesn't collapse while
        // the incoming pane is prepared.
        let outgoing_height = if let Some(visible) = run.visible_pane {
            self.animator.fade(&visible, 0.0, run.duration).await;
            if !self.still_current(group, &ticket) {
                return Ok(Activation::Superseded);
            }
            let height = self.doc.measure_height(&visible);
            {
                let mut g = group.write();
                for pane in &mut g.panes {
                    if pane.element == visible {
                        pane.visible = false;
                    }
                }
            }
            self.doc.set_visible(&visible, false);
            height
        } else {
            // A superseded run got here between hide and show; keep the
            // container where it is.
            self.doc.measure_height(&run.container)
        };
        self.doc.fix_height(&run.container, outgoing_height);

        // Stage 4: fetch gate for remote panes.
        let fetch_url = {
            let g = group.read();
            let pane = &g.panes[ticket.target];
            pane.needs_fetch(run.config.reload_ajax)
                .then(|| pane.url().map(str::to_string))
                .flatten()
        };
        if let Some(url) = fetch_url {
            let policy = if run.config.cache_ajax {
                CachePolicy::Use
            } else {
                CachePolicy::Bypass
            };
            match self.loader.fetch(&url, policy).await {
                Ok(body) => {
                    if !self.still_current(group, &ticket) {
                        return Ok(Activation::Superseded);
                    }
                    self.doc.set_content(&run.target_pane, &body);
                    group.write().panes[ticket.target].loaded = true;
                    tracing::info!(
                        group_id = %run.group_id,
                        pane = ticket.target,
                        url = %url,
                        "Loaded remote pane content"
                    );
                }
                Err(e) => {
                    // A failed fetch never aborts the transition; the tab
                    // still lands, possibly empty.
                    tracing::warn!(
                        group_id = %run.group_id,
                        pane = ticket.target,
                        url = %url,
                        error = %e,
                        "Remote pane fetch failed, continuing with existing content"
                    );
                    if !self.still_current(group, &ticket) {
                        return Ok(Activation::Superseded);
                    }
                }
            }
        }

        // Stage 5: show the target transparent, so it occupies layout
        // space for measurement.
        self.doc.set_opacity(&run.target_pane, 0.0);
        self.doc.set_visible(&run.target_pane, true);
        group.write().panes[ticket.target].visible = true;

        // Stage 6: notify, exactly once per transition.
        if let Some(hook) = &self.on_tab_change {
            hook(&run.group_id, ticket.target);
        }

        // Stage 7: resize the container to the target's natural height.
        let target_height = self.doc.measure_height(&run.target_pane);
        self.animator
            .tween_height(&run.container, outgoing_height, target_height, run.duration)
            .await;
        if !self.still_current(group, &ticket) {
            return Ok(Activation::Superseded);
        }

        // Stage 8: fade the target in and give the container its height
        // back.
        self.animator
            .fade(&run.target_pane, 1.0, run.duration)
            .await;
        if !self.still_current(group, &ticket) {
            return Ok(Activation::Superseded);
        }
        self.doc.release_height(&run.container);

        tracing::debug!(
            group_id = %run.group_id,
            pane = ticket.target,
            "Transition settled"
        );
        Ok(Activation::Completed)
    }
}
