#![forbid(unsafe_code)]

//! Interest graph model and validated container.
//!
//! `manifold-graph` owns the static input side of the layout pipeline: labeled,
//! categorized nodes and weighted undirected edges, loaded once and never
//! mutated afterwards. Referential integrity is checked at construction time;
//! the layout engine in `manifold` assumes it and never re-validates.

pub mod error;
mod graph;
mod model;

pub use error::{Error, Result};
pub use graph::InterestGraph;
pub use model::{Category, Edge, Node};
