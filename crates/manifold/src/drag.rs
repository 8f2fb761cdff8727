use crate::solver::{Point, Viewport};

/// Margin the dragged node is clamped to. Tighter than the solver's padding,
/// so users can park nodes closer to the viewport edge than the solver would
/// ever place them.
const DRAG_MARGIN: f64 = 50.0;

/// Single-active-node drag state.
///
/// The offset pins the pointer's grab point relative to the node center so the
/// node doesn't jump on pick-up; it stays fixed for the whole drag.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DragState {
    active: Option<usize>,
    offset_x: f64,
    offset_y: f64,
}

impl DragState {
    pub(crate) fn begin(&mut self, node: usize, pointer: Point, position: Point) {
        self.active = Some(node);
        self.offset_x = pointer.x - position.x;
        self.offset_y = pointer.y - position.y;
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }

    /// Where the dragged node should sit for the given pointer position.
    pub(crate) fn target_position(&self, pointer: Point, viewport: Viewport) -> Point {
        Point {
            x: (pointer.x - self.offset_x)
                .min(viewport.width - DRAG_MARGIN)
                .max(DRAG_MARGIN),
            y: (pointer.y - self.offset_y)
                .min(viewport.height - DRAG_MARGIN)
                .max(DRAG_MARGIN),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.active = None;
    }
}
