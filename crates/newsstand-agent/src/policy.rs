//! Price policy - the evaluation stage of the pipeline
//!
//! Greedy first-match: walk the catalog in marketplace order and take the
//! first item at or under the ceiling. Order from discovery fully determines
//! the outcome; this is not a best-of-set optimization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use newsstand_types::CatalogItem;

/// Default acceptance ceiling in the settlement currency
pub const DEFAULT_CEILING: Decimal = dec!(2.0);

/// The buyer's acceptance rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePolicy {
    /// Accept items priced at or under this
    pub ceiling: Decimal,
}

impl Default for PricePolicy {
    fn default() -> Self {
        Self { ceiling: DEFAULT_CEILING }
    }
}

impl PricePolicy {
    /// Create a policy with a custom ceiling
    pub fn new(ceiling: Decimal) -> Self {
        Self { ceiling }
    }

    /// Whether one item passes the rule
    pub fn accepts(&self, item: &CatalogItem) -> bool {
        item.price <= self.ceiling
    }

    /// Evaluate the catalog and select the first acceptable item
    ///
    /// Items after the accepted one are never examined. Returns a verdict
    /// for every examined candidate so callers can render the trace.
    pub fn evaluate(&self, items: &[CatalogItem]) -> Evaluation {
        let mut verdicts = Vec::new();

        for item in items {
            let accepted = self.accepts(item);
            debug!(
                item = item.id,
                title = %item.title,
                price = %item.price,
                ceiling = %self.ceiling,
                accepted,
                "evaluated candidate"
            );
            verdicts.push(Verdict { item: item.clone(), accepted });

            if accepted {
                return Evaluation {
                    selected: Some(item.clone()),
                    verdicts,
                };
            }
        }

        Evaluation { selected: None, verdicts }
    }
}

/// One examined candidate and whether it passed
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub item: CatalogItem,
    pub accepted: bool,
}

/// Outcome of the evaluation stage
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Verdicts for the examined candidates, in catalog order
    pub verdicts: Vec<Verdict>,
    /// The accepted item, if any
    pub selected: Option<CatalogItem>,
}
