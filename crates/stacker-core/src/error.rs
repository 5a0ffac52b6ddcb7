//! Error types for the game.

use thiserror::Error;

/// Game-wide error type.
///
/// A missed placement is not an error; it is a state transition handled by
/// the session.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected by [`crate::GameConfig::validate`]
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
