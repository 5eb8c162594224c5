//! Discovery types - the marketplace catalog as returned by the discover endpoint

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable item in the marketplace catalog
///
/// Immutable, sourced from the discovery response. The marketplace includes
/// routing hints (`accessEndpoint`, `paymentEndpoint`) alongside the content
/// metadata; they are carried through but the client derives its own URLs
/// from its configured base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Marketplace-assigned item ID
    pub id: i64,
    /// Item title
    pub title: String,
    /// Price in the settlement currency
    pub price: Decimal,
    /// Content category
    pub category: String,
    /// Author name
    pub author: String,
    /// Free preview text
    pub excerpt: String,
    /// Publication timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether access requires payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_required: Option<bool>,
    /// Where the content is served once paid for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_endpoint: Option<String>,
    /// Where payment should be submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_endpoint: Option<String>,
}

impl CatalogItem {
    /// First `max_chars` characters of the excerpt, for evaluation traces
    pub fn excerpt_preview(&self, max_chars: usize) -> String {
        self.excerpt.chars().take(max_chars).collect()
    }
}

/// The discovery response: platform info plus the ordered item catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverResponse {
    /// Platform name
    pub platform: String,
    /// Kind of content offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Number of items in the catalog
    pub total_items: usize,
    /// Settlement currency (reported, not validated)
    pub currency: String,
    /// Settlement network (reported, not validated)
    pub network: String,
    /// The catalog, in marketplace order
    pub items: Vec<CatalogItem>,
}
