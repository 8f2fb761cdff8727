use crate::solver::{Point, Viewport};

const ENTRY_DURATION_MS: f64 = 800.0;
const HUB_STAGGER_MS: f64 = 100.0;
const SATELLITE_BASE_DELAY_MS: f64 = 300.0;
const SATELLITE_STAGGER_MS: f64 = 80.0;
const EDGE_STAGGER_MS: f64 = 50.0;

/// Off-viewport start of the fly-in: on the ray from the viewport center
/// through the node's resting position, at `max(W, H) * 1.2` from the center.
/// A node exactly at the center projects along +x.
pub fn entry_start(resting: Point, viewport: Viewport) -> Point {
    let center = viewport.center();
    let angle = (resting.y - center.y).atan2(resting.x - center.x);
    let distance = viewport.width.max(viewport.height) * 1.2;
    Point {
        x: center.x + angle.cos() * distance,
        y: center.y + angle.sin() * distance,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    Pending,
    Entering,
    Settled,
}

/// Staggered fly-in timeline for nodes and edges, driven by a single clock.
///
/// Every per-node phase and progress value derives from one elapsed-ms
/// counter, so there are no per-node timers to cancel: hiding the section
/// resets the clock and every node is pending again.
#[derive(Debug, Clone)]
pub struct EntryTimeline {
    node_delays: Vec<f64>,
    edge_reveal_at: Vec<f64>,
    clock_ms: f64,
    running: bool,
}

impl EntryTimeline {
    /// `node_is_hub` is indexed like the graph's nodes. Hubs lead the entry;
    /// satellites follow after a fixed base delay. Edges reveal only once the
    /// last node's fly-in window has passed.
    pub fn new(node_is_hub: &[bool], edge_count: usize) -> Self {
        let node_delays = node_is_hub
            .iter()
            .enumerate()
            .map(|(i, &hub)| {
                if hub {
                    i as f64 * HUB_STAGGER_MS
                } else {
                    SATELLITE_BASE_DELAY_MS + i as f64 * SATELLITE_STAGGER_MS
                }
            })
            .collect();

        let edge_base = node_is_hub.len() as f64 * SATELLITE_STAGGER_MS + ENTRY_DURATION_MS;
        let edge_reveal_at = (0..edge_count)
            .map(|i| edge_base + i as f64 * EDGE_STAGGER_MS)
            .collect();

        Self {
            node_delays,
            edge_reveal_at,
            clock_ms: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.clock_ms = 0.0;
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.clock_ms = 0.0;
        self.running = false;
    }

    pub fn tick(&mut self, dt_ms: f64) {
        if self.running {
            self.clock_ms += dt_ms;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self, node: usize) -> EntryPhase {
        if !self.running {
            return EntryPhase::Pending;
        }
        let elapsed = self.clock_ms - self.node_delays[node];
        if elapsed < 0.0 {
            EntryPhase::Pending
        } else if elapsed < ENTRY_DURATION_MS {
            EntryPhase::Entering
        } else {
            EntryPhase::Settled
        }
    }

    /// Eased fly-in progress in `[0, 1]` (ease-out cubic).
    pub fn progress(&self, node: usize) -> f64 {
        if !self.running {
            return 0.0;
        }
        let elapsed = self.clock_ms - self.node_delays[node];
        if elapsed <= 0.0 {
            return 0.0;
        }
        let p = (elapsed / ENTRY_DURATION_MS).min(1.0);
        1.0 - (1.0 - p).powi(3)
    }

    pub fn edge_revealed(&self, edge: usize) -> bool {
        self.running && self.clock_ms >= self.edge_reveal_at[edge]
    }
}
