//! Landscape source integration: fetching, parsing, and normalization

pub mod client;
pub mod normalize;

pub use client::{LandscapeClient, LandscapeDocument};
pub use normalize::flatten_document;

use thiserror::Error;

/// Errors from the landscape source pipeline
#[derive(Debug, Error)]
pub enum LandscapeError {
    /// Every configured source URL failed
    #[error("Failed to fetch landscape YAML. Tried {attempts} URLs. Last error: {message}")]
    SourceUnavailable { attempts: usize, message: String },

    /// A source responded but without a usable `landscape` sequence
    #[error("Invalid landscape data structure: {reason}")]
    InvalidDocument { reason: String },

    /// The response body was not parseable YAML
    #[error("Landscape parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Transport-level failure for a single request
    #[error("Landscape request failed: {0}")]
    Http(#[from] reqwest::Error),
}
