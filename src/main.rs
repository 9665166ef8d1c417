use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use wayfarer::core::config;
use wayfarer::tui;

#[derive(Parser)]
#[command(name = "wayfarer", about = "Terminal travel discovery browser")]
struct Args {
    /// Override the discovery API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to wayfarer.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("wayfarer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Wayfarer starting up");

    let resolved = config::resolve(&config::load(), args.base_url);
    tui::run(resolved)
}
