pub use anyhow::anyhow;
use std::fmt;

/// Failure kinds of proof construction and verification.
///
/// The reply boundary collapses every kind into the single `UNKNOWN_ERROR`
/// wire code; the kind is kept here so diagnostics can tell them apart.
#[derive(Debug)]
pub enum ProofError {
    InvalidHexEncoding(anyhow::Error),
    InvalidManifestUrl(anyhow::Error),
    InvalidWalletAddress(anyhow::Error),
    SigningFailure(anyhow::Error),
}

impl fmt::Display for ProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexEncoding(e) => write!(f, "invalid hex encoding: {}", e),
            Self::InvalidManifestUrl(e) => write!(f, "invalid manifest url: {}", e),
            Self::InvalidWalletAddress(e) => write!(f, "invalid wallet address: {}", e),
            Self::SigningFailure(e) => write!(f, "signing failure: {}", e),
        }
    }
}
