//! find-friends - list the Lens handles of the accounts a Twitter user follows

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use lens_friends::{Config, FriendFinder, Result};
use tracing::error;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "find-friends", version, about)]
struct Args {
    /// Twitter username whose followed accounts are checked
    username: String,

    /// Bearer token to use instead of TWITTER_API_BEARER_TOKEN
    #[arg(long)]
    bearer_token: Option<String>,

    /// Overall resolution deadline in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Print matches as a JSON array
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "find-friends failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::from_default_env().add_directive("lens_friends=info".parse()?);

    // Use JSON format for Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_env()?;

    let mut finder = FriendFinder::from_config(&config)?;
    if let Some(ms) = args.deadline_ms {
        finder = finder.with_deadline(Duration::from_millis(ms));
    }

    let profiles = finder
        .find_friends(&args.username, args.bearer_token.as_deref())
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    println!();
    println!("Lens friends:");
    for profile in &profiles {
        println!("@{} => {}", profile.twitter.handle, profile.lens.handle);
    }

    println!();
    println!("Found {} frens in Lens!! :)", profiles.len());

    Ok(())
}
