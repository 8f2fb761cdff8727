#![forbid(unsafe_code)]

//! Headless force-directed layout and interaction engine for interest graphs.
//!
//! The one-shot solver places a validated [`graph::InterestGraph`] into a
//! bounded viewport; [`LayoutEngine`] wraps the converged layout with the
//! frame-driven runtime around it (drag, ambient float, staggered entry
//! timeline). Rendering is the caller's concern: the engine only hands out
//! per-frame positions and reveal state.

pub use manifold_graph as graph;

mod drag;
mod engine;
mod entry;
mod float;
mod solver;

pub use engine::{LayoutEngine, LayoutPosition};
pub use entry::{EntryPhase, EntryTimeline, entry_start};
pub use float::FloatClock;
pub use solver::{LayoutOptions, Point, Viewport, effective_radius, solve};
