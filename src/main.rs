use std::sync::Arc;
use std::time::Duration;

use rfp_assist::analysis::eligibility;
use rfp_assist::analysis::risk;
use rfp_assist::checklist::{ChecklistBoard, ChecklistFilter, sample_checklist};
use rfp_assist::error::QueryError;
use rfp_assist::qa::{
    CannedAnswerSource, QueryResponder, ResponderConfig, default_bank, suggested_questions,
};
use rfp_assist::report::{ReportSummary, sample_profile};
use tokio::io::{AsyncBufReadExt, BufReader};

const GREETING: &str = "I'm your RFP analysis assistant. I can answer questions about the IT \
                        Modernization RFP document and provide answers with citations. How can \
                        I help you today?";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let delay_ms: u64 = std::env::var("RFP_ASSIST_RESPONSE_DELAY_MS")
        .unwrap_or_else(|_| "1500".to_string())
        .parse()
        .unwrap_or(1500);

    let config = ResponderConfig {
        response_delay: Duration::from_millis(delay_ms),
    };

    // Optional pinned seed for the random fallback
    let source = match std::env::var("RFP_ASSIST_RNG_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
    {
        Some(seed) => CannedAnswerSource::with_seed(default_bank(), config, seed),
        None => CannedAnswerSource::new(default_bank(), config),
    };
    let responder = QueryResponder::with_greeting(Arc::new(source), GREETING);

    let mut board = ChecklistBoard::new(sample_checklist())?;
    let eligibility = eligibility::sample_report();
    let risk = risk::sample_assessment();
    let profile = sample_profile();

    let stats = board.stats();
    eprintln!("📄 RFP Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   RFP: {} ({})", profile.title, profile.agency);
    eprintln!("   Due: {} — {} remaining", profile.due_date, profile.time_left);
    eprintln!(
        "   Eligibility: {}%  Risk: {}%  Checklist: {}%",
        eligibility.overall_score, risk.overall_risk, stats.completion_pct
    );
    eprintln!("\n   Try asking:");
    for suggestion in suggested_questions() {
        eprintln!("     {}", suggestion.text);
    }
    eprintln!("\n   Commands: /checklist, /toggle <id>, /report, /quit");
    eprintln!("   Type a question and press Enter.\n");

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => {}
            "/quit" => break,
            "/checklist" => print_checklist(&board),
            "/report" => {
                let summary = ReportSummary::compile(
                    profile.clone(),
                    &eligibility,
                    &risk,
                    &board.stats(),
                );
                println!("\n{}", summary.export(Duration::ZERO).await);
            }
            _ if line.starts_with("/toggle ") => {
                let id = line.trim_start_matches("/toggle ").trim();
                match board.toggle_completed(id) {
                    Ok(item) => {
                        let state = if item.completed {
                            "complete"
                        } else {
                            "incomplete"
                        };
                        println!("\nItem marked as {state} — {}\n", item.name);
                    }
                    Err(e) => eprintln!("⚠️  {e}"),
                }
            }
            question => {
                eprintln!("⏳ Analyzing RFP document...");
                match responder.submit(question).await {
                    Ok(reply) => {
                        println!("\n{}\n", reply.content);
                        if !reply.sources.is_empty() {
                            println!("Sources:");
                            for source in &reply.sources {
                                println!("  [{} (p. {})] {}", source.citation, source.page, source.text);
                            }
                            println!();
                        }
                    }
                    Err(QueryError::EmptyQuestion) => {}
                    Err(e) => eprintln!("⚠️  {e}"),
                }
            }
        }
        eprint!("> ");
    }

    Ok(())
}

fn print_checklist(board: &ChecklistBoard) {
    let stats = board.stats();
    println!(
        "\nSubmission checklist — {} of {} complete ({}%), required {} of {} ({}%)",
        stats.completed,
        stats.total,
        stats.completion_pct,
        stats.required_completed,
        stats.required_total,
        stats.required_completion_pct,
    );
    for group in board.grouped(ChecklistFilter::All) {
        println!("\n{} Documents", group.section);
        for item in &group.items {
            let mark = if item.completed { "x" } else { " " };
            let tag = if item.required { " (required)" } else { "" };
            println!("  [{mark}] {} — {}{tag}", item.id, item.name);
        }
    }
    println!();
}
