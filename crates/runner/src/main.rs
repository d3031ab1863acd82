use std::sync::Arc;
use tandem_clock::SystemClock;
use tandem_gateway::ChannelEventSource;
use tandem_gateway::adapters::{JsonLinesFeed, JsonLinesSink};
use tandem_runner::{TraderConfig, TraderSession, build_trader, spawn_feed};

fn print_help() {
    eprintln!(
        r#"Tandem - ETF/future pair trader

USAGE:
    tandem --feed <PATH> [OPTIONS]

OPTIONS:
    --feed <PATH>       Recorded exchange events, one JSON object per line
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (logs go to stderr)

OUTPUT:
    Every command the trader sends is printed to stdout as one JSON line.

EXAMPLES:
    # Replay with default limits
    tandem --feed session.jsonl

    # Replay with a config file, logging each decision
    RUST_LOG=debug tandem --feed session.jsonl --config tandem.json
"#
    );
}

fn path_argument(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(path) => path.clone(),
        None => {
            eprintln!("Error: {} requires a path argument", flag);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut feed_path: Option<String> = None;
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--feed" | "-f" => {
                i += 1;
                feed_path = Some(path_argument(&args, i, "--feed"));
            }
            "--config" | "-c" => {
                i += 1;
                config_path = Some(path_argument(&args, i, "--config"));
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(feed_path) = feed_path else {
        eprintln!("Error: --feed is required");
        print_help();
        std::process::exit(1);
    };

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            TraderConfig::from_file(&path)?
        }
        None => {
            log::info!("Using default configuration");
            TraderConfig::default()
        }
    };
    log::info!(
        "Limits: lot={} position={} tick={} eligibility={:?}",
        config.lot_size,
        config.position_limit,
        config.tick_size,
        config.eligibility
    );

    let feed = JsonLinesFeed::open(&feed_path).await?;
    let (publisher, events) = ChannelEventSource::pair(config.channel_capacity);
    let feed_task = spawn_feed(feed, publisher);

    let trader = build_trader(&config, Arc::new(SystemClock::new()));
    let sink = JsonLinesSink::new(tokio::io::stdout());
    let session = TraderSession::new(trader, events, sink);
    log::info!("Replaying {} as session {}", feed_path, session.session_id());

    let report = tokio::select! {
        report = session.run() => report?,
        _ = tokio::signal::ctrl_c() => {
            log::warn!("Interrupted");
            return Ok(());
        }
    };

    match feed_task.await {
        Ok(Ok(published)) => log::debug!("Feed task published {} events", published),
        Ok(Err(e)) => log::error!("Feed failed: {}", e),
        Err(e) => log::error!("Feed task panicked: {}", e),
    }

    log::info!(
        "Final position {} after {} events, {} commands; {:?}",
        report.strategy.position(),
        report.events_processed,
        report.commands_sent,
        report.strategy.stats()
    );

    Ok(())
}
