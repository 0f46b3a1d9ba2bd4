//! Tab group: the structural model of one tabbed component

use parking_lot::RwLock;
use std::sync::Arc;

use tabkit_dom::ElementRef;

use crate::config::TabsConfig;
use crate::error::GroupError;
use crate::nav::NavItem;
use crate::pane::Pane;
use crate::Result;

/// Shared form of a group: the registry and the transition engine both
/// hold these.
pub type GroupHandle = Arc<RwLock<TabGroup>>;

/// Bookkeeping for one accepted activation run. The engine checks its
/// `generation` against the group before every stage side effect, so a
/// superseded run degrades into guarded no-ops.
#[derive(Debug, Clone, Copy)]
pub struct ActivationTicket {
    pub generation: u64,
    pub outgoing: usize,
    pub target: usize,
}

/// One independent tabbed component instance.
///
/// `active_pane` is the single source of truth for the current tab. Only
/// `begin_activation` mutates it; the engine's animation stages then
/// converge the document toward it.
#[derive(Debug)]
pub struct TabGroup {
    pub id: String,
    pub root: ElementRef,
    /// Wrapper element whose height is animated to match the active pane.
    pub container: ElementRef,
    pub panes: Vec<Pane>,
    pub nav_items: Vec<NavItem>,
    active_pane: usize,
    generation: u64,
    pub config: TabsConfig,
}

impl TabGroup {
    /// Assemble and validate a group. Pane 0 becomes active; panes and
    /// nav items are fixed in number from here on.
    pub fn new(
        id: String,
        root: ElementRef,
        container: ElementRef,
        mut panes: Vec<Pane>,
        mut nav_items: Vec<NavItem>,
        config: TabsConfig,
    ) -> Result<Self> {
        if panes.is_empty() {
            return Err(GroupError::EmptyGroup(id));
        }
        if nav_items.len() != panes.len() {
            return Err(GroupError::CountMismatch {
                group: id,
                nav_items: nav_items.len(),
                panes: panes.len(),
            });
        }
        for (i, pane) in panes.iter().enumerate() {
            if panes[..i].iter().any(|p| p.identity == pane.identity) {
                return Err(GroupError::DuplicateIdentity {
                    group: id,
                    identity: pane.identity.clone(),
                });
            }
        }

        for pane in &mut panes {
            pane.visible = false;
        }
        for item in &mut nav_items {
            item.is_active = false;
        }
        panes[0].visible = true;
        nav_items[0].is_active = true;

        Ok(Self {
            id,
            root,
            container,
            panes,
            nav_items,
            active_pane: 0,
            generation: 0,
            config,
        })
    }

    pub fn into_handle(self) -> GroupHandle {
        Arc::new(RwLock::new(self))
    }

    pub fn active_pane(&self) -> usize {
        self.active_pane
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn pane(&self, index: usize) -> Result<&Pane> {
        self.panes.get(index).ok_or(GroupError::IndexOutOfBounds {
            index,
            len: self.panes.len(),
        })
    }

    /// Accept or reject an activation request.
    ///
    /// Returns `None` when the target is already active (re-selecting the
    /// current tab must not animate or fetch). Otherwise swaps the nav
    /// active flags, moves `active_pane`, bumps the generation, and
    /// returns the ticket the engine's stages run under. Nav flags and
    /// `active_pane` move immediately so a later, faster activation wins
    /// over a still-running one.
    pub fn begin_activation(&mut self, target: usize) -> Result<Option<ActivationTicket>> {
        if target >= self.panes.len() {
            return Err(GroupError::IndexOutOfBounds {
                index: target,
                len: self.panes.len(),
            });
        }
        if target == self.active_pane {
            return Ok(None);
        }

        let outgoing = self.active_pane;
        self.nav_items[outgoing].is_active = false;
        self.nav_items[target].is_active = true;
        self.active_pane = target;
        self.generation += 1;

        tracing::debug!(
            group_id = %self.id,
            from = outgoing,
            to = target,
            generation = self.generation,
            "Tab activation"
        );

        Ok(Some(ActivationTicket {
            generation: self.generation,
            outgoing,
            target,
        }))
    }

    /// Whether a run started at `generation` is still the newest one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Settled-state invariant: exactly one visible pane and one active
    /// nav item, both at `active_pane`.
    pub fn is_settled(&self) -> bool {
        let visible: Vec<usize> = self
            .panes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.visible)
            .map(|(i, _)| i)
            .collect();
        let active: Vec<usize> = self
            .nav_items
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_active)
            .map(|(i, _)| i)
            .collect();
        visible == vec![self.active_pane] && active == vec![self.active_pane]
    }
}
