use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain record not found: {0}")]
    NotFound(String),

    #[error("Referral chain exceeded maximum depth of {max_depth}")]
    MaxDepthExceeded { max_depth: usize },

    #[error("Failed to connect to nameserver {server}: {reason}")]
    DialFailure { server: String, reason: String },

    #[error("DNS codec error: {0}")]
    CodecFailure(String),

    #[error("Transport error: {0}")]
    TransportFailure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}
