//! Animator trait and the instant (headless) implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::document::DocumentAdapter;
use crate::element::ElementRef;

/// Drives timed visual transitions. Each method resolves when the
/// transition completes; the engine awaits that completion before moving
/// to its next stage.
#[async_trait]
pub trait Animator: Send + Sync {
    /// Tween an element's opacity to `to` over `duration`.
    async fn fade(&self, element: &ElementRef, to: f64, duration: Duration);

    /// Tween an element's pinned height from `from` to `to` over `duration`.
    async fn tween_height(&self, element: &ElementRef, from: f64, to: f64, duration: Duration);

    /// Scroll the viewport to a vertical offset over `duration`.
    async fn scroll_to(&self, offset: f64, duration: Duration);
}

/// Animator that skips the tween and applies final values immediately.
///
/// Used headless and in tests, where animation timing is irrelevant but
/// the end state still has to land in the document.
pub struct InstantAnimator {
    doc: Arc<dyn DocumentAdapter>,
}

impl InstantAnimator {
    pub fn new(doc: Arc<dyn DocumentAdapter>) -> Self {
        Self { doc }
    }
}

#[async_trait]
impl Animator for InstantAnimator {
    async fn fade(&self, element: &ElementRef, to: f64, _duration: Duration) {
        self.doc.set_opacity(element, to);
    }

    async fn tween_height(&self, element: &ElementRef, _from: f64, to: f64, _duration: Duration) {
        self.doc.fix_height(element, to);
    }

    async fn scroll_to(&self, _offset: f64, _duration: Duration) {}
}
