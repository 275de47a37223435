//! Exchange rate provider port.
//!
//! The service only knows this trait. The HTTP implementation lives in
//! `dropship-fx`; tests plug in stubs.

use async_trait::async_trait;
use thiserror::Error;

use super::exchange::RateMap;

/// Why a rate fetch failed.
///
/// The variants split into two groups that the service treats differently:
/// a rejected response (`Unavailable`, `MissingRates`) falls back to the
/// static table, while a raised failure (`Transport`, `Decode`) prefers a
/// stale cached snapshot when one exists.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API answered with a non-success status.
    #[error("rate API answered with status {status}")]
    Unavailable {
        /// HTTP status code.
        status: u16,
    },

    /// The API answered but the body has no `rates` field.
    #[error("rate API response has no rates")]
    MissingRates,

    /// The request could not be completed (offline, timeout, DNS).
    #[error("rate API request failed: {0}")]
    Transport(String),

    /// The body was not valid JSON.
    #[error("rate API response could not be decoded: {0}")]
    Decode(String),
}

impl ProviderError {
    /// True when the request raised rather than being answered.
    #[must_use]
    pub const fn is_raised(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

/// Source of live exchange rates.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches rates relative to `base`.
    ///
    /// The returned map need not contain `base` itself.
    async fn fetch_rates(&self, base: &str) -> Result<RateMap, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_classification() {
        assert!(ProviderError::Transport("offline".into()).is_raised());
        assert!(ProviderError::Decode("eof".into()).is_raised());
        assert!(!ProviderError::Unavailable { status: 503 }.is_raised());
        assert!(!ProviderError::MissingRates.is_raised());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ProviderError::Unavailable { status: 429 }.to_string(),
            "rate API answered with status 429"
        );
        assert_eq!(
            ProviderError::Transport("connection refused".into()).to_string(),
            "rate API request failed: connection refused"
        );
    }
}
