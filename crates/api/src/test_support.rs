//! Shared helpers for route tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use rust_decimal_macros::dec;

use crate::AppState;
use dropship_core::currency::{CurrencyService, ProviderError, RateMap, RateProvider};

/// Answers USD requests with fixed rates; everything else is offline.
#[derive(Default)]
pub struct StubProvider {
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for StubProvider {
    async fn fetch_rates(&self, base: &str) -> Result<RateMap, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match base {
            "USD" => Ok(RateMap::from([
                ("EUR".to_string(), dec!(0.9)),
                ("GBP".to_string(), dec!(0.8)),
                ("JPY".to_string(), dec!(150)),
            ])),
            _ => Err(ProviderError::Transport("offline".into())),
        }
    }
}

pub fn create_test_state() -> (Arc<StubProvider>, AppState) {
    let provider = Arc::new(StubProvider::default());
    let state = AppState {
        currency: Arc::new(CurrencyService::with_provider(provider.clone())),
    };
    (provider, state)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
