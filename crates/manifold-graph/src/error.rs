#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains an edge with a missing endpoint: {from} -> {to}")]
    MissingEndpoint { from: String, to: String },

    #[error("graph contains a duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
