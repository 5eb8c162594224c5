//! Newsstand CLI - demo run of the autonomous content buyer
//!
//! Picks one buyer persona (at random unless pinned), runs the full
//! discover → evaluate → purchase → analyze cycle against the marketplace,
//! and renders the run report.
//!
//! # Quick Start
//!
//! ```bash
//! # Against a local marketplace on the default port
//! newsstand
//!
//! # Pinned persona, reproducible wallet, custom ceiling
//! newsstand --agent ResearchBot_v2.1 --seed 7 --ceiling 1.0
//! ```

use std::process::ExitCode;

use clap::Parser;
use colored::*;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

mod display;

use newsstand_agent::{BuyerAgent, PricePolicy, RunOutcome, RunReport, WalletForge, DEFAULT_CEILING, PERSONAS};
use newsstand_client::{MarketplaceClient, DEFAULT_ENDPOINT};

/// Newsstand - autonomous buyer demo for the paid-content marketplace
#[derive(Parser, Debug)]
#[command(name = "newsstand")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Marketplace base URL
    #[arg(long, env = "NEWSSTAND_SERVER", default_value = DEFAULT_ENDPOINT)]
    server: String,

    /// Pin the persona instead of selecting one at random
    #[arg(long)]
    agent: Option<String>,

    /// Seed wallet and score generation for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Price acceptance ceiling in the settlement currency
    #[arg(long, default_value_t = DEFAULT_CEILING)]
    ceiling: Decimal,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let persona = match &args.agent {
        Some(id) => id.clone(),
        None => PERSONAS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(PERSONAS[0])
            .to_string(),
    };

    let forge = match args.seed {
        Some(seed) => WalletForge::seeded(seed),
        None => WalletForge::from_entropy(),
    };

    let market = MarketplaceClient::connect(&args.server)?;
    let mut agent = BuyerAgent::new(&persona, market)
        .with_policy(PricePolicy::new(args.ceiling))
        .with_forge(forge);

    println!("{}", "🤖 Newsstand agent demo".bright_white().bold());
    println!("{}", "One autonomous buyer, one purchase cycle".bright_black());
    display::labeled("Marketplace", &args.server);
    display::labeled("Persona", &persona);

    let report = agent.run().await;
    render(&report, args.ceiling);

    Ok(if report.outcome.is_completed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Render one run report as progress sections
fn render(report: &RunReport, ceiling: Decimal) {
    display::labeled("Wallet", &report.wallet_address);

    if let Some(discovery) = &report.discovery {
        display::section("🔍 Discovery");
        display::success(&format!("{} items available", discovery.total_items));
        display::kv("Platform", &discovery.platform);
        display::kv("Currency", &format!("{} ({})", discovery.currency, discovery.network));
    }

    if let Some(evaluation) = &report.evaluation {
        display::section("🧮 Evaluation");
        for verdict in &evaluation.verdicts {
            display::info(&format!("📝 {}", verdict.item.title));
            display::kv("Price", &verdict.item.price.to_string());
            display::kv("Category", &verdict.item.category);
            display::kv("Author", &verdict.item.author);
            display::kv("Excerpt", &format!("{}...", verdict.item.excerpt_preview(100)));
            if verdict.accepted {
                display::success("worth purchasing");
            } else {
                display::error(&format!("over the {ceiling} ceiling"));
            }
        }
    }

    match &report.outcome {
        RunOutcome::Completed { tx_hash, report: analysis } => {
            display::section("💳 Purchase");
            display::success("payment settled");
            display::kv("Tx hash", tx_hash);

            display::section("📊 Analysis");
            display::kv("Characters", &analysis.char_count.to_string());
            display::kv("Keywords", &analysis.matched_keywords.join(", "));
            display::kv("Relevance", &format!("{:.1}%", analysis.relevance_percent()));

            println!();
            println!(
                "{}",
                format!("🎉 {} finished the cycle", report.agent_id).bright_green().bold()
            );
        }
        RunOutcome::Aborted(reason) => {
            display::section("⛔ Aborted");
            display::error(&reason.to_string());
        }
    }
}
