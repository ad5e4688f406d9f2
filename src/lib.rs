pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        http::StatusCode,
        routing::{get, post},
    },
    config::Settings,
    domain::catalog::MessageCatalog,
    services::resolver::OutcomeFilter,
    std::{sync::Arc, time::Duration},
    tower_http::timeout::TimeoutLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub catalog: Arc<dyn MessageCatalog>,
    pub filters: Arc<Vec<OutcomeFilter>>,
}

impl AppState {
    pub fn new(settings: Settings, catalog: impl MessageCatalog + 'static) -> Self {
        Self {
            settings: Arc::new(settings),
            catalog: Arc::new(catalog),
            filters: Arc::new(Vec::new()),
        }
    }

    pub fn with_filters(mut self, filters: Vec<OutcomeFilter>) -> Self {
        self.filters = Arc::new(filters);
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/payments/resolve", post(adapters::http::resolve_handler))
        .route("/services/{name}", get(adapters::http::service_handler))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
