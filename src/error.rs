use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListwiseError>;

/// Errors surfaced at the edges of the crate.
///
/// The engines themselves never fail: malformed query input falls back to a
/// safe default (unknown facet ignored, unparseable sort value ordered last,
/// stale selection id dropped). Errors exist for the collaborators a bulk
/// action hands records to (exporters, composers) and for the CLI client.
#[derive(Error, Debug)]
pub enum ListwiseError {
    #[error("Action error: {0}")]
    Action(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
