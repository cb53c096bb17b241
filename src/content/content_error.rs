use thiserror::Error;

/// Ways a remote content fetch can fail. All of them are absorbed by the resolver.
#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("Source reported an error: {0}")]
    Payload(String),
    #[error("Malformed content payload: {0}")]
    Malformed(String),
    #[error("Content store failed: {0}")]
    Store(String),
}
