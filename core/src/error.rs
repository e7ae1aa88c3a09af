//! Error types
//!
//! Gameplay outcomes (mismatch, ignored input, unknown identifiers) are
//! domain results, not errors; the only fallible machinery is config
//! persistence.

use thiserror::Error;

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}
