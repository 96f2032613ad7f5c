use std::time::{Duration, Instant};

/// Distance from a viewport edge, in pixels, that arms a page switch.
pub const EDGE_THRESHOLD: f32 = 80.0;
/// Minimum gap between two page-switch requests while dragging.
pub const PAGE_SWITCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging { page: usize, from_slot: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Idle,
    InPage {
        page: usize,
    },
    CrossPage {
        from_page: usize,
        from_slot: usize,
        to_page: usize,
    },
}

/// Tracks one in-progress drag: where it started, which adjacent page
/// it is currently armed to commit to, and when the last page-switch
/// request went out. Page switching itself is the view's job; this only
/// asks for it.
pub struct DragCoordinator {
    phase: DragPhase,
    armed_target: Option<usize>,
    last_switch_request: Option<Instant>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            armed_target: None,
            last_switch_request: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn armed_target(&self) -> Option<usize> {
        self.armed_target
    }

    pub fn begin(&mut self, page: usize, from_slot: usize) {
        self.phase = DragPhase::Dragging { page, from_slot };
        self.armed_target = None;
        self.last_switch_request = None;
    }

    /// Feed one pointer update. Returns the page to switch to when the
    /// pointer sits close enough to an edge, the adjacent page exists,
    /// the debounce window has passed and the target is new. Leaving
    /// the edge zone disarms any pending cross-page move.
    pub fn update(
        &mut self,
        x: f32,
        viewport_width: f32,
        num_pages: usize,
        now: Instant,
    ) -> Option<usize> {
        let page = match self.phase {
            DragPhase::Dragging { page, .. } => page,
            DragPhase::Idle => return None,
        };

        let target = if x < EDGE_THRESHOLD && page > 0 {
            page - 1
        } else if x > viewport_width - EDGE_THRESHOLD && page + 1 < num_pages {
            page + 1
        } else {
            self.armed_target = None;
            return None;
        };

        if self.armed_target == Some(target) {
            return None;
        }
        let debounced = self
            .last_switch_request
            .is_some_and(|last| now.duration_since(last) <= PAGE_SWITCH_DEBOUNCE);
        if debounced {
            return None;
        }

        self.armed_target = Some(target);
        self.last_switch_request = Some(now);
        Some(target)
    }

    /// Finish the drag. In-page reorders have already been applied and
    /// persisted incrementally, so they only need the dragging flag
    /// cleared; an armed cross-page target turns into a move order for
    /// the caller.
    pub fn release(&mut self) -> DragOutcome {
        let outcome = match self.phase {
            DragPhase::Idle => DragOutcome::Idle,
            DragPhase::Dragging { page, from_slot } => match self.armed_target {
                Some(target) if target != page => DragOutcome::CrossPage {
                    from_page: page,
                    from_slot,
                    to_page: target,
                },
                _ => DragOutcome::InPage { page },
            },
        };
        self.reset();
        outcome
    }

    /// A platform-cancelled gesture must still land back in Idle, or a
    /// stuck dragging flag would swallow every later tap. Moves already
    /// applied during the drag are not rolled back.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.armed_target = None;
        self.last_switch_request = None;
    }
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
