//! Analysis types - the keyword report computed over purchased content

use serde::{Deserialize, Serialize};

/// Result of the keyword analysis over one purchased article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    /// Content length in characters (Unicode scalar values, not bytes)
    pub char_count: usize,
    /// Keywords found in the content, in keyword-set order
    pub matched_keywords: Vec<String>,
    /// Matched keywords divided by the keyword-set size
    pub relevance: f64,
}

impl ContentReport {
    /// Relevance as a percentage, for display
    pub fn relevance_percent(&self) -> f64 {
        self.relevance * 100.0
    }
}
