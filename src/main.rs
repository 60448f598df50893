//! img2haiku-rs - image to haiku HTTP endpoint

use clap::Parser;
use img2haiku_rs::config::DEFAULT_CONFIG_PATH;
use img2haiku_rs::{build_info, server};
use std::path::PathBuf;
use std::process::ExitCode;

/// Serve the compose endpoint
#[derive(Debug, Parser)]
#[command(name = "haiku-gateway", version, about)]
struct Args {
    /// YAML configuration file; environment variables override its values
    #[arg(short, long, env = "HAIKU_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let info = build_info();
    eprintln!("haiku-gateway {} ({})", info.version, info.git_hash);

    match server::run_server(&args.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
