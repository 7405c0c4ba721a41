//! Registry error types
//!
//! Error types for tunnel handle operations.

/// Error type for tunnel operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TunnelError {
    /// The tunnel's completion signal has already fired
    AlreadyCompleted,
}

impl std::fmt::Display for TunnelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TunnelError::AlreadyCompleted => write!(f, "Tunnel already completed"),
        }
    }
}

impl std::error::Error for TunnelError {}
