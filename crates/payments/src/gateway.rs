//! Bill creation against the hosted payment gateway.
//!
//! Flow: `POST {base}/bills` with the bill details and our
//! credentials; the gateway answers with a bill code, and the buyer is
//! redirected to `{base}/{bill_code}` to pay. The gateway confirms
//! payment later through our public callback endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::PaymentConfig;

/// A bill to be created, as assembled by the checkout flow.
///
/// Amounts are integer minor units (cents). Buyer contact fields come
/// straight from the public checkout form.
#[derive(Debug, Clone)]
pub struct BillRequest {
    pub name: String,
    pub description: String,
    pub amount_cents: i64,
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// A successfully created bill: where to send the buyer.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSession {
    pub bill_code: String,
    pub payment_url: String,
}

/// Errors from the payment gateway.
#[derive(Debug, thiserror::Error)]
pub enum PaymentGatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("payment gateway error ({status}): {body}")]
    Api { status: u16, body: String },

    /// No gateway is configured.
    #[error("payment gateway is not configured")]
    Disabled,
}

/// Bill creation, behind a trait so tests and unconfigured deployments
/// can substitute their own.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_bill(
        &self,
        request: &BillRequest,
    ) -> Result<CheckoutSession, PaymentGatewayError>;
}

#[derive(Serialize)]
struct CreateBillPayload<'a> {
    api_key: &'a str,
    category: &'a str,
    name: &'a str,
    description: &'a str,
    amount: i64,
    reference: &'a str,
    customer_name: &'a str,
    customer_email: &'a str,
    customer_phone: &'a str,
    return_url: String,
    callback_url: String,
}

#[derive(Deserialize)]
struct CreateBillResponse {
    bill_code: String,
}

/// HTTP client for the hosted gateway.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    category: String,
    public_base_url: String,
}

impl HttpGateway {
    /// Build a gateway client from config, or `None` when no gateway
    /// origin is configured.
    pub fn from_config(config: &PaymentConfig) -> Option<Self> {
        let base_url = config.base_url.clone()?;
        Some(Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: config.api_key.clone(),
            category: config.category.clone(),
            public_base_url: config.public_base_url.clone(),
        })
    }

    fn payment_url(base_url: &str, bill_code: &str) -> String {
        format!("{base_url}/{bill_code}")
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PaymentGatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PaymentGatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn create_bill(
        &self,
        request: &BillRequest,
    ) -> Result<CheckoutSession, PaymentGatewayError> {
        tracing::debug!(
            reference = %request.reference,
            amount_cents = request.amount_cents,
            "creating payment bill"
        );
        let payload = CreateBillPayload {
            api_key: &self.api_key,
            category: &self.category,
            name: &request.name,
            description: &request.description,
            amount: request.amount_cents,
            reference: &request.reference,
            customer_name: &request.customer_name,
            customer_email: &request.customer_email,
            customer_phone: &request.customer_phone,
            return_url: format!("{}/checkout/complete", self.public_base_url),
            callback_url: format!("{}/api/v1/payments/callback", self.public_base_url),
        };

        let response = self
            .client
            .post(format!("{}/bills", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let created = response.json::<CreateBillResponse>().await?;
        Ok(CheckoutSession {
            payment_url: Self::payment_url(&self.base_url, &created.bill_code),
            bill_code: created.bill_code,
        })
    }
}

/// Gateway used when checkout is not configured. Every call reports
/// [`PaymentGatewayError::Disabled`].
pub struct NullGateway;

#[async_trait]
impl PaymentGateway for NullGateway {
    async fn create_bill(
        &self,
        _: &BillRequest,
    ) -> Result<CheckoutSession, PaymentGatewayError> {
        Err(PaymentGatewayError::Disabled)
    }
}
