//! Payment-gateway configuration.

/// Gateway connection settings, read once at startup.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Gateway origin, e.g. `https://gateway.example.com`. Unset
    /// leaves checkout disabled.
    pub base_url: Option<String>,

    /// Merchant secret key sent with every bill request.
    pub api_key: String,

    /// Gateway-side category code new bills are filed under.
    pub category: String,

    /// Public origin of this service, used to build the return and
    /// callback URLs embedded in each bill.
    pub public_base_url: String,
}

impl PaymentConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default | Purpose |
    /// |----------|---------|---------|
    /// | `PAYMENT_BASE_URL` | unset | gateway origin; unset disables checkout |
    /// | `PAYMENT_API_KEY` | empty | merchant secret key |
    /// | `PAYMENT_CATEGORY` | empty | gateway category code |
    /// | `PUBLIC_BASE_URL` | `http://localhost:3000` | this service's public origin |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PAYMENT_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty()),
            api_key: std::env::var("PAYMENT_API_KEY").unwrap_or_default(),
            category: std::env::var("PAYMENT_CATEGORY").unwrap_or_default(),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }
}
