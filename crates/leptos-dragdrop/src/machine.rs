//! Drag phase machine
//!
//! Pure state transitions behind the DOM handlers in the crate root.
//! `I` identifies the dragged item, `T` the drop target.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<I, T> {
    Idle,
    /// Button pressed on an item, not yet moved past the threshold
    Pending { item: I, start: (i32, i32) },
    Dragging { item: I },
    Hovering { item: I, target: T },
}

impl<I, T> Default for DragPhase<I, T> {
    fn default() -> Self {
        DragPhase::Idle
    }
}

/// True when the pointer moved more than the threshold on either axis.
pub fn crosses_threshold(start: (i32, i32), pos: (i32, i32)) -> bool {
    (pos.0 - start.0).abs() > DRAG_THRESHOLD_PX || (pos.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

impl<I: Clone + PartialEq, T: Clone + PartialEq> DragPhase<I, T> {
    /// Primary button down on `item`. Ignored while another gesture is live.
    pub fn press(&mut self, item: I, start: (i32, i32)) {
        if matches!(self, DragPhase::Idle) {
            *self = DragPhase::Pending { item, start };
        }
    }

    /// Pointer moved. Returns true when this motion started the drag.
    pub fn motion(&mut self, pos: (i32, i32)) -> bool {
        match self {
            DragPhase::Pending { item, start } if crosses_threshold(*start, pos) => {
                *self = DragPhase::Dragging { item: item.clone() };
                true
            }
            _ => false,
        }
    }

    /// Pointer entered a drop target.
    pub fn enter(&mut self, target: T) {
        if let Some(item) = self.dragged().cloned() {
            *self = DragPhase::Hovering { item, target };
        }
    }

    /// Pointer left `target`. Leaving a target other than the hovered one
    /// keeps the current hover.
    pub fn leave(&mut self, target: &T) {
        if let DragPhase::Hovering { item, target: current } = self {
            if current == target {
                *self = DragPhase::Dragging { item: item.clone() };
            }
        }
    }

    /// Button released. Yields the drop when released over a target and
    /// always returns to idle.
    pub fn release(&mut self) -> Option<(I, T)> {
        match std::mem::take(self) {
            DragPhase::Hovering { item, target } => Some((item, target)),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DragPhase::Idle;
    }

    /// Item under the pointer once the drag has started
    pub fn dragged(&self) -> Option<&I> {
        match self {
            DragPhase::Dragging { item } | DragPhase::Hovering { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            DragPhase::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Phase = DragPhase<u32, &'static str>;

    fn dragging(item: u32) -> Phase {
        let mut phase = Phase::default();
        phase.press(item, (10, 10));
        assert!(phase.motion((30, 10)));
        phase
    }

    #[test]
    fn test_small_motion_stays_pending() {
        let mut phase = Phase::default();
        phase.press(1, (100, 100));
        assert!(!phase.motion((105, 95)));
        assert!(matches!(phase, DragPhase::Pending { item: 1, .. }));
        assert!(!phase.is_dragging());

        // a click releases without dropping
        assert_eq!(phase.release(), None);
        assert_eq!(phase, DragPhase::Idle);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!crosses_threshold((0, 0), (5, -5)));
        assert!(crosses_threshold((0, 0), (0, 6)));
        assert!(crosses_threshold((0, 0), (-6, 0)));
    }

    #[test]
    fn test_drop_over_target() {
        let mut phase = dragging(7);
        assert_eq!(phase.dragged(), Some(&7));

        phase.enter("schedule");
        assert_eq!(phase.target(), Some(&"schedule"));
        assert_eq!(phase.release(), Some((7, "schedule")));
        assert_eq!(phase, DragPhase::Idle);
    }

    #[test]
    fn test_release_outside_target_drops_nothing() {
        let mut phase = dragging(7);
        phase.enter("schedule");
        phase.leave(&"schedule");
        assert_eq!(phase, DragPhase::Dragging { item: 7 });
        assert_eq!(phase.release(), None);
    }

    #[test]
    fn test_stale_leave_keeps_new_hover() {
        let mut phase = dragging(7);
        phase.enter("a");
        phase.enter("b");
        phase.leave(&"a");
        assert_eq!(phase.target(), Some(&"b"));
    }

    #[test]
    fn test_enter_before_drag_is_ignored() {
        let mut phase = Phase::default();
        phase.enter("a");
        assert_eq!(phase, DragPhase::Idle);

        phase.press(3, (0, 0));
        phase.enter("a");
        assert!(matches!(phase, DragPhase::Pending { .. }));
    }

    #[test]
    fn test_press_during_drag_is_ignored() {
        let mut phase = dragging(7);
        phase.press(8, (0, 0));
        assert_eq!(phase.dragged(), Some(&7));
    }

    #[test]
    fn test_cancel() {
        let mut phase = dragging(7);
        phase.enter("a");
        phase.cancel();
        assert_eq!(phase.release(), None);
    }
}
