use serde::{Deserialize, Serialize};

/// Thematic grouping of a node. Closed set; rendering layers match on it
/// exhaustively instead of falling back on unknown string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Science,
    Tech,
    Philosophy,
    Creative,
}

impl Category {
    /// Display color as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            Category::Science => "#8F00FF",
            Category::Tech => "#00FF9D",
            Category::Philosophy => "#FFD700",
            Category::Creative => "#FF6B6B",
        }
    }
}

/// One labeled concept. Static input; never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Relative importance in `0.5..=2.0`; feeds the node's effective radius.
    pub size: f64,
    /// Major hub nodes get a larger base radius and a calmer float amplitude.
    #[serde(default)]
    pub is_hub: bool,
}

/// Weighted relation between two nodes. Undirected for force purposes though
/// stored directionally; multiple edges between the same pair are allowed and
/// each contributes independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Connection strength in `(0, 1]`; scales both line thickness and how
    /// tightly the solver holds the pair near its ideal separation.
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
