use crate::error::{Error, Result};
use crate::model::{Edge, Node};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Validated node/edge container.
///
/// Construction checks referential integrity once (unique node ids, every edge
/// endpoint resolvable) so downstream consumers can index without re-checking.
/// Endpoint indices are resolved eagerly for the same reason: the solver's hot
/// loop works on indices, never on id strings.
#[derive(Debug, Clone)]
pub struct InterestGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    id_to_idx: FxHashMap<String, usize>,
    edge_endpoints: Vec<(usize, usize)>,
}

#[derive(Deserialize)]
struct GraphFile {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl InterestGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut id_to_idx = FxHashMap::default();
        id_to_idx.reserve(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if id_to_idx.insert(node.id.clone(), idx).is_some() {
                return Err(Error::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        let mut edge_endpoints = Vec::with_capacity(edges.len());
        for edge in &edges {
            let (Some(&from), Some(&to)) = (id_to_idx.get(&edge.from), id_to_idx.get(&edge.to))
            else {
                return Err(Error::MissingEndpoint {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            };
            edge_endpoints.push((from, to));
        }

        Ok(Self {
            nodes,
            edges,
            id_to_idx,
            edge_endpoints,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: GraphFile = serde_json::from_str(json)?;
        Self::new(file.nodes, file.edges)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Resolved `(from, to)` node indices, parallel to `edges()`.
    pub fn edge_endpoints(&self) -> &[(usize, usize)] {
        &self.edge_endpoints
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.id_to_idx.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index(id).map(|idx| &self.nodes[idx])
    }

    /// First edge connecting `a` and `b` in either direction.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
    }
}
