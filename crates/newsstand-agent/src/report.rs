//! Run reports - the terminal state of one pipeline execution

use newsstand_client::MarketError;
use newsstand_types::{ContentReport, DiscoverResponse};

use crate::policy::Evaluation;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Discovery,
    Evaluation,
    Purchase,
    Analysis,
}

/// Why a run stopped short of analysis
///
/// Transport-level and service-level failures stay tagged separately even
/// though the demo surface prints them the same way.
#[derive(Debug, thiserror::Error)]
pub enum AbortReason {
    /// Discovery failed at the transport or service level
    #[error("discovery failed: {0}")]
    DiscoveryFailed(MarketError),

    /// Discovery succeeded but the catalog was empty
    #[error("no content discovered")]
    NothingDiscovered,

    /// No catalog item passed the price policy
    #[error("no content worth purchasing")]
    NothingAcceptable,

    /// The purchase was rejected or its response was unusable
    #[error("purchase failed: {0}")]
    PurchaseFailed(MarketError),
}

impl AbortReason {
    /// The stage after which the pipeline aborted
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::DiscoveryFailed(_) | Self::NothingDiscovered => PipelineStage::Discovery,
            Self::NothingAcceptable => PipelineStage::Evaluation,
            Self::PurchaseFailed(_) => PipelineStage::Purchase,
        }
    }
}

/// Terminal result of one run
#[derive(Debug)]
pub enum RunOutcome {
    /// All four stages ran; carries the proof-of-payment and the report
    Completed {
        tx_hash: String,
        report: ContentReport,
    },
    /// The pipeline short-circuited
    Aborted(AbortReason),
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Everything one run produced, for display and inspection
#[derive(Debug)]
pub struct RunReport {
    /// Persona that ran the pipeline
    pub agent_id: String,
    /// Wallet address generated for this run
    pub wallet_address: String,
    /// Discovery response, when that stage completed
    pub discovery: Option<DiscoverResponse>,
    /// Evaluation trace, when that stage ran
    pub evaluation: Option<Evaluation>,
    /// Terminal outcome
    pub outcome: RunOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_reason_maps_to_stage() {
        assert_eq!(AbortReason::NothingDiscovered.stage(), PipelineStage::Discovery);
        assert_eq!(AbortReason::NothingAcceptable.stage(), PipelineStage::Evaluation);

        let rejected = AbortReason::PurchaseFailed(MarketError::Service {
            status: 402,
            body: "Payment required".to_string(),
        });
        assert_eq!(rejected.stage(), PipelineStage::Purchase);
    }
}
