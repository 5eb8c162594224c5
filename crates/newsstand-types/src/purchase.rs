//! Purchase types - payment request and proof-of-payment response
//!
//! The purchase endpoint takes the buyer's identity and wallet plus a small
//! metadata bag, and answers with a payment record (including the
//! transaction hash) and the unlocked content body.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CatalogItem;

/// Purpose tag sent with every purchase
pub const PURCHASE_PURPOSE: &str = "content_analysis";

/// A purchase request submitted to the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// The item being bought
    pub article_id: i64,
    /// Buyer identity
    pub agent_id: String,
    /// Buyer wallet address (cosmetic hex placeholder, no key material)
    pub agent_wallet: String,
    /// Request metadata echoed into the marketplace's records
    pub metadata: PurchaseMetadata,
}

impl PurchaseRequest {
    /// Build a request for `item`, stamped with the current UTC time
    ///
    /// `evaluation_score` is purely illustrative and comes from the buyer's
    /// generator, not from any real quality signal.
    pub fn new(item: &CatalogItem, agent_id: &str, agent_wallet: &str, evaluation_score: f64) -> Self {
        Self {
            article_id: item.id,
            agent_id: agent_id.to_string(),
            agent_wallet: agent_wallet.to_string(),
            metadata: PurchaseMetadata {
                purpose: PURCHASE_PURPOSE.to_string(),
                timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                article_title: item.title.clone(),
                evaluation_score,
            },
        }
    }
}

/// Metadata bag attached to a purchase request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseMetadata {
    /// Why the agent is buying
    pub purpose: String,
    /// ISO-8601 UTC timestamp of the request
    pub timestamp: String,
    /// Echoed item title
    pub article_title: String,
    /// Illustrative score in [0.7, 1.0)
    pub evaluation_score: f64,
}

/// Raw purchase response as it appears on the wire
///
/// The marketplace answers 200 in two shapes: a completed purchase carrying
/// `payment` and `content`, or an "already purchased" notice carrying only
/// `message` and `accessEndpoint`. Both are modeled here; the client promotes
/// the complete shape to [`PurchaseOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentReceipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PurchasedContent>,
}

/// Payment record returned by the marketplace
///
/// Only the transaction hash is required; the rest of the record mirrors the
/// marketplace's payment row and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// Transaction hash, the proof-of-payment
    pub tx_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

/// The unlocked content body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedContent {
    /// Full article text
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A completed purchase: receipt plus content, both guaranteed present
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOutcome {
    pub payment: PaymentReceipt,
    pub content: PurchasedContent,
}
