//! StudyMate server binary
//!
//! Run with: GEMINI_API_KEY=... cargo run -p studymate --bin studymate-server

use studymate::{config::StudyConfig, server::StudyServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studymate=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                        StudyMate                          ║
║       PDF summaries, explanations, and quizzes            ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration; fails fast when GEMINI_API_KEY is absent
    let config = StudyConfig::load_default()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.generate_model);
    tracing::info!("  - Max attempts: {}", config.llm.max_attempts);
    tracing::info!("  - Extraction cap: {} chars", config.extraction.max_chars);
    tracing::info!("  - Max upload size: {} bytes", config.server.max_upload_size);

    // Create and start server
    let server = StudyServer::new(config);

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/upload      - Upload a PDF");
    println!("  POST /api/summary     - Generate concise notes");
    println!("  POST /api/explanation - Explain in simple language");
    println!("  POST /api/quiz        - Generate a practice quiz");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
