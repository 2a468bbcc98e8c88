//! Error types for this library

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid address or prefix length: {0}")]
    InvalidAddress(String),
}
