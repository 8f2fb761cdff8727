use crate::drag::DragState;
use crate::entry::{self, EntryPhase, EntryTimeline};
use crate::float::FloatClock;
use crate::graph::InterestGraph;
use crate::solver::{self, LayoutOptions, Point, Viewport};
use serde::Serialize;

/// Per-node working state.
///
/// `x, y` is the current simulated position; `base_x, base_y` the rest anchor
/// the float layer oscillates around (overwritten on drag release); `start_x,
/// start_y` the fixed off-viewport entry point, computed once per solve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LayoutPosition {
    pub x: f64,
    pub y: f64,
    pub base_x: f64,
    pub base_y: f64,
    pub start_x: f64,
    pub start_y: f64,
}

/// Frame-driven layout engine: owns the converged layout plus the drag, float
/// and entry-timeline runtime around it.
///
/// Single-threaded by construction. Each node has exactly one writer per
/// frame: the drag handler while that node is dragging, nobody otherwise (the
/// float layer only derives a render offset and never touches stored state).
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    graph: InterestGraph,
    options: LayoutOptions,
    viewport: Viewport,
    positions: Vec<LayoutPosition>,
    drag: DragState,
    float: FloatClock,
    timeline: EntryTimeline,
    visible: bool,
}

impl LayoutEngine {
    /// Solves the initial layout for `viewport` immediately.
    pub fn new(graph: InterestGraph, viewport: Viewport, options: LayoutOptions) -> Self {
        let hubs: Vec<bool> = graph.nodes().iter().map(|n| n.is_hub).collect();
        let timeline = EntryTimeline::new(&hubs, graph.edges().len());
        let mut engine = Self {
            graph,
            options,
            viewport,
            positions: Vec::new(),
            drag: DragState::default(),
            float: FloatClock::default(),
            timeline,
            visible: false,
        };
        engine.solve_layout();
        engine
    }

    fn solve_layout(&mut self) {
        let resting = solver::solve(&self.graph, self.viewport, &self.options);
        self.positions = resting
            .into_iter()
            .map(|p| {
                let start = entry::entry_start(p, self.viewport);
                LayoutPosition {
                    x: p.x,
                    y: p.y,
                    base_x: p.x,
                    base_y: p.y,
                    start_x: start.x,
                    start_y: start.y,
                }
            })
            .collect();
    }

    /// Full re-solve for new dimensions. Every prior position is discarded,
    /// including drag re-anchors, and any active drag is released. A resize
    /// during an earlier resize's result simply wins; there is no debouncing
    /// at this layer.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.drag.clear();
        self.solve_layout();
    }

    /// Advance the frame clocks: the float clock by its fixed step, the entry
    /// timeline by `dt_ms` (only while started).
    pub fn tick(&mut self, dt_ms: f64) {
        self.float.tick();
        self.timeline.tick(dt_ms);
    }

    /// Visibility is explicit engine input. Becoming visible starts the entry
    /// timeline from zero; becoming hidden resets every node to pending and
    /// hides all edges. Repeated calls with the same value are no-ops.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.timeline.start();
        } else {
            self.timeline.reset();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start dragging the node with `id`, grabbing it at `pointer`. Returns
    /// false for an unknown id; hit testing is the caller's contract. If
    /// another node was already dragging it is released first, exactly as if
    /// the pointer had been lifted.
    pub fn begin_drag(&mut self, id: &str, pointer: Point) -> bool {
        let Some(node) = self.graph.node_index(id) else {
            return false;
        };
        if self.drag.active().is_some() {
            self.end_drag();
        }
        let position = Point {
            x: self.positions[node].x,
            y: self.positions[node].y,
        };
        self.drag.begin(node, pointer, position);
        true
    }

    /// Move the dragged node to follow the pointer, keeping the grab offset.
    /// Only the dragged node moves; there is no re-solve and no effect on any
    /// other node. No-op without an active drag.
    pub fn drag_move(&mut self, pointer: Point) {
        let Some(node) = self.drag.active() else {
            return;
        };
        let target = self.drag.target_position(pointer, self.viewport);
        self.positions[node].x = target.x;
        self.positions[node].y = target.y;
    }

    /// Release the active drag. Wherever the node sits becomes its new rest
    /// anchor until the next resize. A release with no active drag is a no-op,
    /// so pointer-up and pointer-leave can both be forwarded unconditionally.
    pub fn end_drag(&mut self) {
        let Some(node) = self.drag.active() else {
            return;
        };
        self.positions[node].base_x = self.positions[node].x;
        self.positions[node].base_y = self.positions[node].y;
        self.drag.clear();
    }

    /// Index of the node currently dragging, if any.
    pub fn dragging(&self) -> Option<usize> {
        self.drag.active()
    }

    /// Position to draw the node at this frame: the raw working position while
    /// dragging, otherwise the rest anchor plus the ambient float offset.
    pub fn render_position(&self, node: usize) -> Point {
        let pos = &self.positions[node];
        if self.drag.active() == Some(node) {
            return Point { x: pos.x, y: pos.y };
        }
        let (dx, dy) = self.float.offset(node, self.graph.nodes()[node].is_hub);
        Point {
            x: pos.base_x + dx,
            y: pos.base_y + dy,
        }
    }

    pub fn entry_phase(&self, node: usize) -> EntryPhase {
        self.timeline.phase(node)
    }

    /// Eased fly-in progress in `[0, 1]`.
    pub fn entry_progress(&self, node: usize) -> f64 {
        self.timeline.progress(node)
    }

    pub fn edge_revealed(&self, edge: usize) -> bool {
        self.timeline.edge_revealed(edge)
    }

    pub fn graph(&self) -> &InterestGraph {
        &self.graph
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn positions(&self) -> &[LayoutPosition] {
        &self.positions
    }
}
