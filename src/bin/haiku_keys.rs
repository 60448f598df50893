//! Key and token tooling
//!
//! `generate` creates an RSA key pair; `token` issues a token from a
//! private key so the server can be called by hand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use img2haiku_rs::config::{DEFAULT_AUDIENCE, DEFAULT_SUBJECT, default_token_ttl};
use img2haiku_rs::{ExpectedClaims, JwtHandler, KeyPair};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "haiku-keys", version, about = "Generate keys and issue tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a PEM key pair
    Generate {
        /// Write private.pem and public.pem into this directory instead of printing
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print as JWT_PRIVATE_KEY / JWT_PUBLIC_KEY lines for a .env file
        #[arg(long, conflicts_with = "out_dir")]
        env: bool,
    },
    /// Issue a token signed with a private key
    Token {
        /// PKCS#8 private key file; falls back to JWT_PRIVATE_KEY
        #[arg(long)]
        private_key: Option<PathBuf>,

        #[arg(long, default_value = DEFAULT_SUBJECT)]
        subject: String,

        #[arg(long, default_value = DEFAULT_AUDIENCE)]
        audience: String,

        /// Lifetime in seconds
        #[arg(long, default_value_t = default_token_ttl())]
        ttl: u64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    match Cli::parse().command {
        Command::Generate { out_dir, env } => generate(out_dir, env),
        Command::Token {
            private_key,
            subject,
            audience,
            ttl,
        } => issue(private_key, &subject, &audience, ttl),
    }
}

fn generate(out_dir: Option<PathBuf>, env: bool) -> Result<()> {
    let pair = KeyPair::generate().context("Error generating key pair")?;

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Error creating {}", dir.display()))?;
        std::fs::write(dir.join("private.pem"), &pair.private)?;
        std::fs::write(dir.join("public.pem"), &pair.public)?;
        println!("Wrote private.pem and public.pem to {}", dir.display());
    } else if env {
        println!("JWT_PRIVATE_KEY=\"{}\"", pair.private.trim_end());
        println!("JWT_PUBLIC_KEY=\"{}\"", pair.public.trim_end());
    } else {
        print!("{}{}", pair.private, pair.public);
    }

    Ok(())
}

fn issue(private_key: Option<PathBuf>, subject: &str, audience: &str, ttl: u64) -> Result<()> {
    let private_pem = match private_key {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Error reading {}", path.display()))?,
        None => std::env::var("JWT_PRIVATE_KEY")
            .context("Pass --private-key or set JWT_PRIVATE_KEY")?,
    };

    let pair = KeyPair::from_private_pem(&private_pem).context("Error loading private key")?;
    let handler = JwtHandler::new(&pair, ExpectedClaims::new(subject, audience))?;
    let token = handler.issue_token(subject, audience, Duration::from_secs(ttl))?;

    println!("{}", token);
    Ok(())
}
