//! Terminal front-end for a running gemini-proxy.
//!
//! ```text
//! gemini-prompt --url http://localhost:8080 "Explain borrowing in one sentence"
//! ```

use clap::Parser;
use gemini_proxy::client::{PromptSession, ProxyClient, FAILURE_MESSAGE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gemini-prompt", version, about = "Send one prompt through gemini-proxy")]
struct Args {
    /// Origin of the proxy.
    #[arg(long, default_value = "http://localhost:8080")]
    url: String,

    /// Prompt text; multiple words are joined with spaces.
    #[arg(required = true)]
    prompt: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = ProxyClient::new(&args.url);

    let mut session = PromptSession::new();
    session.set_prompt(args.prompt.join(" "));

    if !session.submit(&client).await {
        eprintln!("prompt must not be empty");
        return ExitCode::from(2);
    }

    match session.response() {
        Some(FAILURE_MESSAGE) => {
            eprintln!("{}", FAILURE_MESSAGE);
            ExitCode::FAILURE
        }
        Some(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        None => ExitCode::SUCCESS,
    }
}
