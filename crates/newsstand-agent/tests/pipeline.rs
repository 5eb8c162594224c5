use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use newsstand_agent::{AbortReason, BuyerAgent, PipelineStage, RunOutcome, WalletForge};
use newsstand_client::{MarketError, MarketplaceClient};

const AGENT: &str = "ContentAnalyzer_v1.0";

fn catalog_body(items: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "platform": "blocktrend-ai",
        "contentType": "premium-articles",
        "totalItems": items.len(),
        "currency": "USDC",
        "network": "base-sepolia",
        "items": items
    })
}

fn sample_item(id: i64, price: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Article {id}"),
        "excerpt": "HTTP 402 micropayments for machine readers",
        "category": "protocols",
        "price": price,
        "author": "A. Fielding"
    })
}

async fn mount_discover(server: &MockServer, items: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/api/ai/discover"))
        .and(header("X-AI-Agent", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body(items)))
        .mount(server)
        .await;
}

fn buyer(server: &MockServer) -> BuyerAgent {
    let market = MarketplaceClient::connect(&server.uri()).unwrap();
    BuyerAgent::new(AGENT, market).with_forge(WalletForge::seeded(11))
}

#[tokio::test]
async fn full_cycle_completes_with_receipt_and_report() {
    let server = MockServer::start().await;
    mount_discover(&server, vec![sample_item(1, "1.000000")]).await;

    Mock::given(method("POST"))
        .and(path("/api/ai/purchase"))
        .and(body_partial_json(json!({"articleId": 1, "agentId": AGENT})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "payment": {"txHash": "0xABC", "status": "completed"},
            "content": {"content": "AI 代理 402 支付"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = buyer(&server).run().await;

    assert_eq!(report.agent_id, AGENT);
    assert_eq!(report.wallet_address.len(), 42);
    assert!(report.wallet_address.starts_with("0x"));

    let discovery = report.discovery.unwrap();
    assert_eq!(discovery.items.len(), 1);

    match report.outcome {
        RunOutcome::Completed { tx_hash, report } => {
            // The hash passes through unmodified
            assert_eq!(tx_hash, "0xABC");
            assert_eq!(report.char_count, 12);
            assert_eq!(report.matched_keywords, vec!["AI", "代理", "402", "支付"]);
            assert!((report.relevance - 4.0 / 6.0).abs() < f64::EPSILON);
        }
        RunOutcome::Aborted(reason) => panic!("expected completion, aborted: {reason}"),
    }
}

#[tokio::test]
async fn rejected_purchase_aborts_without_analysis() {
    let server = MockServer::start().await;
    mount_discover(&server, vec![sample_item(1, "1.500000")]).await;

    Mock::given(method("POST"))
        .and(path("/api/ai/purchase"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({"message": "Payment required"})))
        .expect(1)
        .mount(&server)
        .await;

    let report = buyer(&server).run().await;

    match report.outcome {
        RunOutcome::Aborted(reason) => {
            assert_eq!(reason.stage(), PipelineStage::Purchase);
            match reason {
                AbortReason::PurchaseFailed(MarketError::Service { status, .. }) => {
                    assert_eq!(status, 402)
                }
                other => panic!("expected service rejection, got {other:?}"),
            }
        }
        RunOutcome::Completed { .. } => panic!("pipeline must abort on 402"),
    }
}

#[tokio::test]
async fn server_error_purchase_aborts_the_same_way() {
    let server = MockServer::start().await;
    mount_discover(&server, vec![sample_item(1, "1.500000")]).await;

    Mock::given(method("POST"))
        .and(path("/api/ai/purchase"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let report = buyer(&server).run().await;

    match report.outcome {
        RunOutcome::Aborted(AbortReason::PurchaseFailed(e)) => assert_eq!(e.status(), Some(500)),
        other => panic!("expected purchase failure, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_catalog_aborts_before_purchase() {
    let server = MockServer::start().await;
    mount_discover(&server, vec![]).await;

    Mock::given(method("POST"))
        .and(path("/api/ai/purchase"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = buyer(&server).run().await;

    assert!(matches!(
        report.outcome,
        RunOutcome::Aborted(AbortReason::NothingDiscovered)
    ));
    assert!(report.evaluation.is_none());
}

#[tokio::test]
async fn all_items_over_ceiling_aborts_before_purchase() {
    let server = MockServer::start().await;
    mount_discover(&server, vec![sample_item(1, "3.500000"), sample_item(2, "9.000000")]).await;

    Mock::given(method("POST"))
        .and(path("/api/ai/purchase"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = buyer(&server).run().await;

    match report.outcome {
        RunOutcome::Aborted(reason) => assert_eq!(reason.stage(), PipelineStage::Evaluation),
        RunOutcome::Completed { .. } => panic!("nothing was acceptable"),
    }

    let evaluation = report.evaluation.unwrap();
    assert_eq!(evaluation.verdicts.len(), 2);
    assert!(evaluation.selected.is_none());
}

#[tokio::test]
async fn failed_discovery_aborts_with_tagged_cause() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ai/discover"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/ai/purchase"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = buyer(&server).run().await;

    match report.outcome {
        RunOutcome::Aborted(reason) => {
            assert_eq!(reason.stage(), PipelineStage::Discovery);
            // Service rejection, distinguishable from an empty catalog
            assert!(matches!(reason, AbortReason::DiscoveryFailed(_)));
        }
        RunOutcome::Completed { .. } => panic!("discovery failed"),
    }
    assert!(report.discovery.is_none());
}

#[tokio::test]
async fn each_run_generates_a_fresh_wallet() {
    let server = MockServer::start().await;
    mount_discover(&server, vec![]).await;

    let mut agent = buyer(&server);
    let first = agent.run().await;
    let second = agent.run().await;

    assert_ne!(first.wallet_address, second.wallet_address);
}
