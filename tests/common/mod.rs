#![allow(dead_code)]

use axum::extract::ConnectInfo;
use qr_shortlink::application::services::ShortLinkCreator;
use qr_shortlink::domain::entities::ShortLink;
use qr_shortlink::domain::repositories::LinkRegistry;
use qr_shortlink::infrastructure::persistence::InMemoryLinkRegistry;
use qr_shortlink::state::AppState;
use qr_shortlink::utils::code_generator::{RandomCodeGenerator, SeededCodeGenerator};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const BASE_URL: &str = "https://links.example.com";

pub fn create_test_state() -> AppState {
    let registry: Arc<dyn LinkRegistry> = Arc::new(InMemoryLinkRegistry::new());
    let creator = ShortLinkCreator::new(
        registry,
        Arc::new(RandomCodeGenerator::default()),
        BASE_URL,
    );

    AppState::new(creator)
}

pub fn create_seeded_state(seed: u64) -> AppState {
    let registry: Arc<dyn LinkRegistry> = Arc::new(InMemoryLinkRegistry::new());
    let creator = ShortLinkCreator::new(
        registry,
        Arc::new(SeededCodeGenerator::new(seed, 6)),
        BASE_URL,
    );

    AppState::new(creator)
}

pub async fn create_test_link(state: &AppState, code: &str, url: &str) -> ShortLink {
    state.registry.insert(code, url).await.unwrap()
}

pub async fn click_count(state: &AppState, code: &str) -> i64 {
    state
        .registry
        .find_by_code(code)
        .await
        .unwrap()
        .unwrap()
        .click_count
}

/// Inserts a fixed peer address so IP-keyed middleware works under `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
