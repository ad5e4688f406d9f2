use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{
            error::CheckoutError,
            id::OrderId,
            order::{RemoteError, RemoteOrder, UpstreamResponse},
            outcome::CheckoutContext,
            service::ServiceKind,
        },
        services::resolver::{PaymentOutcomeResolver, Resolution},
    },
    axum::{
        Json,
        extract::{Path, State},
    },
    serde::Deserialize,
};

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// Raw PayPal order; parsed by hand so a bad intent surfaces as a
    /// precondition error rather than a generic body rejection.
    #[serde(default)]
    pub order: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RemoteError>,
    #[serde(default)]
    pub fallback_message: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    pub context: CheckoutContext,
}

impl ResolveRequest {
    fn upstream(&mut self) -> Result<UpstreamResponse, CheckoutError> {
        match (self.order.take(), self.error.take()) {
            (Some(_), Some(_)) => Err(CheckoutError::Validation(
                "order and error are mutually exclusive".into(),
            )),
            (Some(raw), None) => RemoteOrder::from_value(raw).map(UpstreamResponse::Order),
            (None, Some(err)) => Ok(UpstreamResponse::Error(err)),
            (None, None) => Ok(UpstreamResponse::Absent),
        }
    }
}

#[tracing::instrument(
    name = "resolve_payment",
    skip_all,
    fields(order_ref = tracing::field::Empty, outcome = tracing::field::Empty)
)]
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(mut req): Json<ResolveRequest>,
) -> Result<Json<Resolution>, ApiError> {
    tracing::Span::current().record(
        "order_ref",
        tracing::field::display(&req.context.order_ref),
    );
    let upstream = req.upstream()?;

    let mut resolver = PaymentOutcomeResolver::new(&*state.catalog, state.settings.environment)
        .with_filters(state.filters.iter().cloned());
    if let Some(id) = req.order_id.take() {
        resolver = resolver.with_order_id(OrderId::new(id)?);
    }

    let fallback = req
        .fallback_message
        .as_deref()
        .unwrap_or(state.settings.default_error_message.as_str());
    let resolution = resolver.resolve_for(&upstream, fallback, &req.context);

    tracing::Span::current().record("outcome", resolution.outcome.as_str());
    tracing::info!(
        payment_method = %req.context.payment_method,
        code = resolution.outcome.failure_code().unwrap_or_default(),
        "payment resolved"
    );
    Ok(Json(resolution))
}

pub async fn service_handler(
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind: ServiceKind = name.parse()?;
    Ok(Json(serde_json::json!({"service": kind.name()})))
}
