use thiserror::Error;

/// Errors at the edges of the diagnostic engine.
///
/// Traversal and rendering themselves are infallible: data the service does
/// not report is rendered as omission, not failure. Only loading a captured
/// snapshot can go wrong.
#[derive(Error, Debug)]
pub enum ScreenLogError {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),

    #[error("unreadable snapshot: {0}")]
    UnreadableSnapshot(#[from] std::io::Error),
}
