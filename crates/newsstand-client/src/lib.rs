//! Newsstand Client - thin HTTP transport wrapper for the content marketplace
//!
//! The marketplace exposes two JSON endpoints to agents: catalog discovery
//! and purchase. This crate wraps them behind [`MarketplaceClient`] and maps
//! every failure into the tagged [`MarketError`] taxonomy so callers can
//! tell a dead network from a rejecting service.
//!
//! # Quick Start
//!
//! ```ignore
//! use newsstand_client::MarketplaceClient;
//!
//! let market = MarketplaceClient::local()?;
//! let catalog = market.discover("ResearchBot_v2.1").await?;
//! println!("{} items on {}", catalog.total_items, catalog.platform);
//! ```

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder};
use tracing::debug;

use newsstand_types::{DiscoverResponse, PurchaseOutcome, PurchaseRequest, PurchaseResponse};

// ============================================================================
// Error Types
// ============================================================================

/// Client-side error taxonomy
///
/// Discovery and purchase failures stay distinguishable: `Transport` covers
/// connection, DNS and timeout failures, `Service` a marketplace that
/// answered with a non-success status, and `Incomplete` a 200 body missing
/// the fields a completed purchase must carry.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("marketplace error: {status} - {body}")]
    Service { status: u16, body: String },

    #[error("marketplace response missing `{field}`")]
    Incomplete { field: &'static str },
}

impl MarketError {
    /// Whether this is a request-timeout transport failure
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// The HTTP status the marketplace rejected with, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client result type
pub type Result<T> = std::result::Result<T, MarketError>;

// ============================================================================
// Configuration
// ============================================================================

/// Default marketplace endpoint (local loopback)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Header marking requests as agent traffic
pub const AGENT_FLAG_HEADER: &str = "X-AI-Agent";

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Marketplace base URL
    pub endpoint: String,
    /// Request timeout; expiry surfaces as a transport failure
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

// ============================================================================
// Marketplace Client
// ============================================================================

/// HTTP client for the marketplace's agent endpoints
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    config: Config,
    client: Client,
}

impl MarketplaceClient {
    /// Connect to a local marketplace instance with default configuration
    pub fn local() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Connect to a specific endpoint
    pub fn connect(endpoint: &str) -> Result<Self> {
        Self::with_config(Config {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            ..Default::default()
        })
    }

    /// Create with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Get the configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Fetch the catalog of purchasable items
    ///
    /// Returns the full discovery response; the item sequence preserves
    /// marketplace order. `agent_id` only identifies the caller in headers.
    pub async fn discover(&self, agent_id: &str) -> Result<DiscoverResponse> {
        let url = format!("{}/api/ai/discover", self.config.endpoint);
        debug!(agent = agent_id, %url, "discovering catalog");

        let resp = self.identified(self.client.get(&url), agent_id).send().await?;

        if !resp.status().is_success() {
            return Err(MarketError::Service {
                status: resp.status().as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Submit a purchase and return the receipt plus content
    ///
    /// Single attempt. There is no idempotency key on the wire, so a retry
    /// layer on top of this call would risk duplicate charges; do not add
    /// one without introducing an idempotency token first.
    pub async fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseOutcome> {
        let url = format!("{}/api/ai/purchase", self.config.endpoint);
        debug!(agent = %request.agent_id, article = request.article_id, %url, "submitting purchase");

        let resp = self
            .identified(self.client.post(&url), &request.agent_id)
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(MarketError::Service {
                status: resp.status().as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let resp: PurchaseResponse = resp.json().await?;

        // A 200 without payment/content is the marketplace's "already
        // purchased" notice, not a completed purchase.
        let payment = resp.payment.ok_or(MarketError::Incomplete { field: "payment" })?;
        let content = resp.content.ok_or(MarketError::Incomplete { field: "content" })?;

        Ok(PurchaseOutcome { payment, content })
    }

    /// Attach the agent-identifying headers
    fn identified(&self, req: RequestBuilder, agent_id: &str) -> RequestBuilder {
        req.header(header::USER_AGENT, format!("AI-Agent/{agent_id}"))
            .header(AGENT_FLAG_HEADER, "true")
    }
}
