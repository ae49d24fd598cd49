//! Fetch the server time once and print it

use clap::Parser;
use db_clock::display::{DisplayClient, NowDisplay, DEFAULT_SERVER_URL};
use db_clock::errors::ClockError;
use db_clock::logging;

#[derive(Debug, Parser)]
#[command(name = "display", about = "Show the current database time reported by db-clock")]
struct Cli {
    /// Endpoint returning the time rows
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), ClockError> {
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = DisplayClient::new(&cli.url)?;

    let mut display = NowDisplay::new();
    display.load(&client).await;

    println!("{}", display);
    Ok(())
}
