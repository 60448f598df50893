//! Command-line client for the compose endpoint
//!
//! Reads an image, sends it with a bearer token and pretty-prints the reply.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use img2haiku_rs::ComposeRequest;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "haiku-client", version, about = "Send an image to the haiku endpoint")]
struct Args {
    /// Path to the image to be processed
    #[arg(long)]
    img_path: PathBuf,

    /// Bearer token for authentication
    #[arg(long, env = "HAIKU_JWT")]
    jwt: String,

    /// Language for the haiku
    #[arg(long, default_value = "English")]
    lang: String,

    /// Comma-separated list of mood tags
    #[arg(long, default_value = "")]
    tags: String,

    /// Server URL
    #[arg(long, env = "HAIKU_URL", default_value = "http://127.0.0.1:8080")]
    url: String,
}

fn tag_list(tags: &str) -> Option<Vec<String>> {
    let list: Vec<String> = tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect();
    (!list.is_empty()).then_some(list)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let image = tokio::fs::read(&args.img_path)
        .await
        .with_context(|| format!("Error reading image {}", args.img_path.display()))?;

    let request = ComposeRequest {
        language: args.lang,
        tags: tag_list(&args.tags),
        base64_image: STANDARD.encode(image),
    };

    println!("Sending request to {}...", args.url);
    let response = reqwest::Client::new()
        .post(&args.url)
        .bearer_auth(&args.jwt)
        .json(&request)
        .send()
        .await
        .context("Error making request")?;

    println!("Response status: {}", response.status());
    let body = response
        .bytes()
        .await
        .context("Error reading response body")?;

    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(json) => println!("Response body: {}", serde_json::to_string_pretty(&json)?),
        Err(e) => anyhow::bail!(
            "Error formatting JSON: {}\n{}",
            e,
            String::from_utf8_lossy(&body)
        ),
    }

    Ok(())
}
