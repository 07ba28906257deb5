//! SnapScribe - Image to Word Document Telegram Bot
//!
//! Receives photos over Telegram, runs OCR on them, and replies with a
//! Word document of the recognized text.

use anyhow::Result;
use clap::Parser;
use snapscribe::config::{self, Config};
use snapscribe::controller::Controller;
use snapscribe::extractor::TextExtractor;
use snapscribe::gateway::TelegramGateway;
use snapscribe::ocr;
use snapscribe::responses::RandomPicker;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the configured OCR engine ("tesseract" or "cli")
    #[arg(long)]
    engine: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("📸 SnapScribe v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load()?;
    if let Some(engine) = args.engine {
        config.ocr_engine = engine;
    }
    if config.bot_token.is_empty() {
        anyhow::bail!(
            "no bot token configured; set bot_token in {}",
            config::config_path().display()
        );
    }

    // Initialize OCR
    let engine = ocr::create_engine(&config)?;
    let extractor = TextExtractor::new(engine, Duration::from_secs(config.ocr_timeout_secs));

    // Initialize gateway
    let gateway = Arc::new(TelegramGateway::new(
        config.bot_token.clone(),
        config.poll_timeout_secs,
    ));
    if !gateway.health_check().await {
        warn!("Telegram getMe failed - check the bot token");
    }

    let controller = Arc::new(Controller::new(
        gateway.clone(),
        extractor,
        Box::new(RandomPicker),
    ));

    // Gateway listener feeds the dispatch loop
    let (tx, mut rx) = mpsc::channel(32);
    let listener = Arc::clone(&gateway);
    tokio::spawn(async move {
        if let Err(e) = listener.listen(tx).await {
            error!("gateway listener stopped: {e}");
        }
    });

    info!("✅ SnapScribe ready - send the bot a photo");

    // One task per inbound event; chats are independent
    while let Some(inbound) = rx.recv().await {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            if let Err(e) = controller.handle(inbound).await {
                error!("failed to handle update: {e}");
            }
        });
    }

    Ok(())
}
