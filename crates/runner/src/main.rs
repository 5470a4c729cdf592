use std::path::PathBuf;

use watchlist_runner::{WatchlistConfig, WatchlistRun};

fn print_help() {
    eprintln!(
        r#"Watchlist generator - Binance pairs ordered by CoinMarketCap rank

USAGE:
    watchlist-gen [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --output <DIR>      Output directory (removed and recreated on every run)
    --sandbox           Use the CoinMarketCap sandbox API
    --no-categories     Skip the per-category watchlists
    --help              Print this help message

ENVIRONMENT VARIABLES:
    CMC_API_KEY             CoinMarketCap API key (required)
    WATCHLIST_OUTPUT_DIR    Output directory (default: output)
    RUST_LOG                Log level filter (default: info)

EXAMPLES:
    # Run with defaults
    CMC_API_KEY=... watchlist-gen

    # BTC pairs, general watchlist only
    CMC_API_KEY=... watchlist-gen --config btc.json --no-categories
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut output_dir: Option<PathBuf> = None;
    let mut sandbox = false;
    let mut categories = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--output" | "-o" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a directory argument");
                    std::process::exit(1);
                }
                output_dir = Some(PathBuf::from(&args[i]));
            }
            "--sandbox" => sandbox = true,
            "--no-categories" => categories = false,
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            WatchlistConfig::from_file(&path)?
        }
        None => WatchlistConfig::default(),
    }
    .with_env();

    if sandbox {
        config = config.with_sandbox();
    }
    if !categories {
        config.categories = false;
    }
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }

    let run = WatchlistRun::from_config(config)?;

    println!(
        "Generating watchlists. This takes a while: CoinMarketCap requests are spaced {} ms apart.",
        run.config().rate_limit.min_interval_ms
    );

    match run.run().await {
        Ok(report) => {
            for file in report.files() {
                println!("{}", file.display());
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Watchlist generation failed: {}", e);
            Err(e.into())
        }
    }
}
