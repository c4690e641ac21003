use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use squid_master::core::config::{self, CliOverrides, SquidConfig};
use squid_master::tui;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squid", version, about = "Squid Master: it thinks about what you say, then says it back")]
struct Args {
    /// Config file to use instead of ~/.squid-master/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quiet period (ms) before "Typing..." settles back to idle
    #[arg(long)]
    idle_timeout_ms: Option<u64>,

    /// Cap (ms) on the simulated thinking time
    #[arg(long)]
    max_latency_ms: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "squid.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Squid Master starting up");

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        warn!("{}; falling back to defaults", e);
        eprintln!("squid: {e}; falling back to defaults");
        SquidConfig::default()
    });
    let overrides = CliOverrides {
        idle_timeout_ms: args.idle_timeout_ms,
        max_latency_ms: args.max_latency_ms,
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
