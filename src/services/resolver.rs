use {
    crate::domain::{
        catalog::MessageCatalog,
        environment::Environment,
        id::OrderId,
        order::{
            AuthorizationStatus, CaptureStatus, OrderIntent, PAYER_ACTION_REL, ProcessorResponse,
            RemoteOrder, UpstreamResponse,
        },
        outcome::{
            CheckoutContext, CheckoutResponse, ORDER_NOT_APPROVED, Outcome, PAYER_ACTION_REQUIRED,
            UNKNOWN_ERROR,
        },
    },
    serde::Serialize,
    std::{fmt, sync::Arc},
};

/// Rewrites an outcome before it reaches the host. Filters run in the order
/// they were registered.
pub type OutcomeFilter = Arc<dyn Fn(Outcome, &CheckoutContext) -> Outcome + Send + Sync>;

/// Outcome plus the flat response derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub response: CheckoutResponse,
}

/// Result of inspecting the order's payments, before the approval check.
#[derive(Debug, Default)]
struct Verdict {
    success: bool,
    code: String,
    message: String,
}

impl Verdict {
    fn declined(processor: Option<&ProcessorResponse>, catalog: &dyn MessageCatalog) -> Self {
        match processor.and_then(ProcessorResponse::decline_code) {
            Some(code) => Self {
                success: false,
                code: code.to_string(),
                message: catalog.lookup(code),
            },
            None => Self::default(),
        }
    }
}

/// Classifies one payment attempt. Build one per checkout request; it keeps
/// nothing between calls.
pub struct PaymentOutcomeResolver<'a> {
    catalog: &'a dyn MessageCatalog,
    environment: Environment,
    order_id: Option<OrderId>,
    filters: Vec<OutcomeFilter>,
}

impl fmt::Debug for PaymentOutcomeResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentOutcomeResolver")
            .field("environment", &self.environment)
            .field("order_id", &self.order_id)
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl<'a> PaymentOutcomeResolver<'a> {
    pub fn new(catalog: &'a dyn MessageCatalog, environment: Environment) -> Self {
        Self {
            catalog,
            environment,
            order_id: None,
            filters: Vec::new(),
        }
    }

    /// Order id captured when the order was created. Takes precedence over
    /// the id on the response being resolved when building the fallback
    /// approval URL.
    pub fn with_order_id(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Outcome, &CheckoutContext) -> Outcome + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn with_filters(mut self, filters: impl IntoIterator<Item = OutcomeFilter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn resolve(&self, response: &UpstreamResponse, fallback_message: &str) -> Outcome {
        let verdict = match response {
            UpstreamResponse::Error(err) => Verdict {
                success: false,
                code: err.code.clone(),
                message: err.message.clone(),
            },
            UpstreamResponse::Absent => Verdict {
                success: false,
                code: UNKNOWN_ERROR.to_string(),
                message: fallback_message.to_string(),
            },
            UpstreamResponse::Order(order) => self.inspect_payments(order),
        };

        let outcome = if Self::needs_approval(response) {
            Outcome::NeedsApproval {
                redirect_url: self.approval_url(response),
            }
        } else if verdict.success {
            Outcome::Success
        } else {
            Outcome::Failure {
                code: verdict.code,
                message: verdict.message,
            }
        };

        tracing::debug!(
            outcome = outcome.as_str(),
            code = outcome.failure_code().unwrap_or_default(),
            environment = %self.environment,
            "payment outcome resolved"
        );
        outcome
    }

    /// Resolves, runs the registered filters, then shapes the host response.
    pub fn resolve_for(
        &self,
        response: &UpstreamResponse,
        fallback_message: &str,
        ctx: &CheckoutContext,
    ) -> Resolution {
        let outcome = self
            .filters
            .iter()
            .fold(self.resolve(response, fallback_message), |outcome, filter| {
                filter(outcome, ctx)
            });
        let response = CheckoutResponse::from_outcome(&outcome, ctx);
        Resolution { outcome, response }
    }

    /// Where to send the payer to finish approving the order: the
    /// `payer-action` link if PayPal sent one, otherwise the hosted checkout
    /// page for the order id.
    pub fn approval_url(&self, response: &UpstreamResponse) -> String {
        if let UpstreamResponse::Order(order) = response {
            if let Some(link) = order.link(PAYER_ACTION_REL) {
                return link.href.clone();
            }
        }

        let base = self.environment.checkout_url();
        let order_id = self
            .order_id
            .as_ref()
            .map(OrderId::as_str)
            .or(match response {
                UpstreamResponse::Order(order) => Some(order.id.as_str()),
                _ => None,
            })
            .filter(|id| !id.is_empty());

        match order_id {
            Some(id) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("token", id)
                    .finish();
                format!("{base}?{query}")
            }
            None => {
                tracing::warn!(
                    environment = %self.environment,
                    "no order id for approval url, using bare checkout url"
                );
                base.to_string()
            }
        }
    }

    fn needs_approval(response: &UpstreamResponse) -> bool {
        match response {
            UpstreamResponse::Order(order) => order.status.needs_approval(),
            UpstreamResponse::Error(err) => {
                err.code == PAYER_ACTION_REQUIRED || err.code == ORDER_NOT_APPROVED
            }
            UpstreamResponse::Absent => false,
        }
    }

    fn inspect_payments(&self, order: &RemoteOrder) -> Verdict {
        match order.intent {
            OrderIntent::Capture => match order.first_capture() {
                Some(capture) if capture.status.is_successful() => Verdict {
                    success: true,
                    ..Verdict::default()
                },
                Some(capture) => {
                    if let CaptureStatus::Other(raw) = &capture.status {
                        tracing::warn!(
                            order_id = %order.id,
                            status = %raw,
                            "unknown capture status, treating as failure"
                        );
                    }
                    Verdict::declined(capture.processor_response.as_ref(), self.catalog)
                }
                None => Verdict::default(),
            },
            OrderIntent::Authorize => match order.first_authorization() {
                Some(auth) if auth.status.is_successful() => Verdict {
                    success: true,
                    ..Verdict::default()
                },
                Some(auth) => {
                    if let AuthorizationStatus::Other(raw) = &auth.status {
                        tracing::warn!(
                            order_id = %order.id,
                            status = %raw,
                            "unknown authorization status, treating as failure"
                        );
                    }
                    Verdict::declined(auth.processor_response.as_ref(), self.catalog)
                }
                None => Verdict::default(),
            },
        }
    }
}
