use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use atlas::core::config;
use atlas::tui;

#[derive(Parser)]
#[command(name = "atlas", about = "Terminal country directory browser")]
struct Args {
    /// Country endpoint base URL (e.g. https://restcountries.com/v2)
    #[arg(long)]
    endpoint: Option<String>,

    /// Countries per page (5 to 10)
    #[arg(long)]
    page_size: Option<usize>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::AtlasConfig::default()
    });
    let resolved = config::resolve(&file_config, args.endpoint.as_deref(), args.page_size);

    log::info!("Atlas starting up (endpoint: {})", resolved.endpoint);

    tui::run(resolved)
}
