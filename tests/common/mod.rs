#![allow(dead_code)]

use ppcp_outcome::domain::catalog::MessageCatalog;
use ppcp_outcome::domain::order::{
    Authorization, AuthorizationStatus, Capture, CaptureStatus, Link, OrderIntent, OrderStatus,
    Payments, ProcessorResponse, PurchaseUnit, RemoteOrder,
};
use ppcp_outcome::domain::outcome::CheckoutContext;

pub const ORDER_ID: &str = "5O190127TN364715T";
pub const PAYER_ACTION_HREF: &str =
    "https://www.sandbox.paypal.com/checkoutnow?token=5O190127TN364715T";

/// Catalog that echoes the code back, so tests can see which code was looked up.
pub struct EchoCatalog;

impl MessageCatalog for EchoCatalog {
    fn lookup(&self, code: &str) -> String {
        format!("message for {code}")
    }
}

pub fn processor(code: &str) -> Option<ProcessorResponse> {
    Some(ProcessorResponse {
        response_code: code.to_string(),
        avs_code: None,
        cvv_code: None,
    })
}

pub fn order(intent: OrderIntent, status: OrderStatus) -> RemoteOrder {
    RemoteOrder {
        id: ORDER_ID.to_string(),
        intent,
        status,
        links: Vec::new(),
        purchase_units: vec![PurchaseUnit::default()],
    }
}

pub fn captured_order(
    status: CaptureStatus,
    processor_response: Option<ProcessorResponse>,
) -> RemoteOrder {
    let mut o = order(OrderIntent::Capture, OrderStatus::Completed);
    o.purchase_units[0].payments = Some(Payments {
        captures: vec![Capture {
            id: "3C679366HH908993F".into(),
            status,
            processor_response,
        }],
        authorizations: Vec::new(),
    });
    o
}

pub fn authorized_order(
    status: AuthorizationStatus,
    processor_response: Option<ProcessorResponse>,
) -> RemoteOrder {
    let mut o = order(OrderIntent::Authorize, OrderStatus::Completed);
    o.purchase_units[0].payments = Some(Payments {
        captures: Vec::new(),
        authorizations: vec![Authorization {
            id: "0T620041CK889853A".into(),
            status,
            processor_response,
        }],
    });
    o
}

pub fn with_payer_action(mut o: RemoteOrder) -> RemoteOrder {
    o.links.push(Link {
        href: format!("https://api.sandbox.paypal.com/v2/checkout/orders/{ORDER_ID}"),
        rel: "self".into(),
        method: Some("GET".into()),
    });
    o.links.push(Link {
        href: PAYER_ACTION_HREF.into(),
        rel: "payer-action".into(),
        method: Some("GET".into()),
    });
    o
}

pub fn context() -> CheckoutContext {
    CheckoutContext {
        order_ref: "1042".into(),
        payment_method: "ppcp".into(),
        return_url: "https://shop.test/checkout/order-received/1042/?key=wc_order_abc".into(),
    }
}
