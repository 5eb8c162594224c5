//! Buyer Agent - runs the discover/evaluate/purchase/analyze pipeline
//!
//! The buyer is an independently constructible value: no process-wide
//! singletons, no state kept between runs. Each run generates a fresh wallet
//! address, issues at most one purchase, and returns a [`RunReport`].

use tracing::{info, warn};

use newsstand_client::MarketplaceClient;
use newsstand_types::{DiscoverResponse, PurchaseRequest};

use crate::analysis::analyze;
use crate::policy::{Evaluation, PricePolicy};
use crate::report::{AbortReason, RunOutcome, RunReport};
use crate::wallet::WalletForge;

/// Candidate personas the demo selects from
pub const PERSONAS: [&str; 3] = [
    "ContentAnalyzer_v1.0",
    "ResearchBot_v2.1",
    "KnowledgeHarvester_v1.5",
];

/// An autonomous content buyer
pub struct BuyerAgent {
    id: String,
    market: MarketplaceClient,
    policy: PricePolicy,
    forge: WalletForge,
}

impl BuyerAgent {
    /// Create a buyer with the default policy and an entropy-seeded forge
    pub fn new(id: impl Into<String>, market: MarketplaceClient) -> Self {
        Self {
            id: id.into(),
            market,
            policy: PricePolicy::default(),
            forge: WalletForge::from_entropy(),
        }
    }

    /// Replace the price policy
    pub fn with_policy(mut self, policy: PricePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the wallet generator (seed it for reproducible runs)
    pub fn with_forge(mut self, forge: WalletForge) -> Self {
        self.forge = forge;
        self
    }

    /// The persona id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Run the full pipeline once
    ///
    /// START → DISCOVERED → EVALUATED → PURCHASED → ANALYZED → DONE, with
    /// ABORTED whenever a stage yields nothing. Transitions are strictly
    /// sequential; nothing is retried and nothing resumes.
    pub async fn run(&mut self) -> RunReport {
        let wallet_address = self.forge.address();
        info!(agent = %self.id, wallet = %wallet_address, "starting purchase cycle");

        // Discovery
        let discovery = match self.market.discover(&self.id).await {
            Ok(discovery) => discovery,
            Err(e) => {
                warn!(agent = %self.id, error = %e, "discovery failed");
                return self.aborted(wallet_address, None, None, AbortReason::DiscoveryFailed(e));
            }
        };
        info!(
            agent = %self.id,
            items = discovery.items.len(),
            platform = %discovery.platform,
            currency = %discovery.currency,
            network = %discovery.network,
            "discovered catalog"
        );
        if discovery.items.is_empty() {
            return self.aborted(wallet_address, Some(discovery), None, AbortReason::NothingDiscovered);
        }

        // Evaluation
        let evaluation = self.policy.evaluate(&discovery.items);
        let Some(item) = evaluation.selected.clone() else {
            return self.aborted(
                wallet_address,
                Some(discovery),
                Some(evaluation),
                AbortReason::NothingAcceptable,
            );
        };
        info!(agent = %self.id, item = item.id, price = %item.price, "selected item");

        // Purchase - at most one per run, never retried
        let request = PurchaseRequest::new(&item, &self.id, &wallet_address, self.forge.evaluation_score());
        let purchase = match self.market.purchase(&request).await {
            Ok(purchase) => purchase,
            Err(e) => {
                warn!(agent = %self.id, item = item.id, error = %e, "purchase failed");
                return self.aborted(
                    wallet_address,
                    Some(discovery),
                    Some(evaluation),
                    AbortReason::PurchaseFailed(e),
                );
            }
        };
        info!(agent = %self.id, tx_hash = %purchase.payment.tx_hash, "purchase settled");

        // Analysis
        let report = analyze(&purchase.content.content);
        info!(
            agent = %self.id,
            chars = report.char_count,
            matched = report.matched_keywords.len(),
            "analyzed content"
        );

        RunReport {
            agent_id: self.id.clone(),
            wallet_address,
            discovery: Some(discovery),
            evaluation: Some(evaluation),
            outcome: RunOutcome::Completed {
                tx_hash: purchase.payment.tx_hash,
                report,
            },
        }
    }

    fn aborted(
        &self,
        wallet_address: String,
        discovery: Option<DiscoverResponse>,
        evaluation: Option<Evaluation>,
        reason: AbortReason,
    ) -> RunReport {
        RunReport {
            agent_id: self.id.clone(),
            wallet_address,
            discovery,
            evaluation,
            outcome: RunOutcome::Aborted(reason),
        }
    }
}
