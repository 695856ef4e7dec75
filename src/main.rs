use truth_fetch::utils::{logger, validation::Validate};
use truth_fetch::{Fetcher, FetcherConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging (stderr only)
    logger::init_cli_logger();

    let config = FetcherConfig::default();
    if let Err(e) = execute(config).await {
        // Log details, then a short message for the user
        tracing::error!("❌ Fetch failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn execute(config: FetcherConfig) -> truth_fetch::Result<()> {
    // Validate the built-in configuration
    config.validate()?;

    // Build the client for the default transport
    let fetcher = Fetcher::new(config)?;

    // One request; status and body go to stdout
    let mut stdout = std::io::stdout();
    let outcome = fetcher.run(&mut stdout).await?;

    tracing::debug!("Printed HTTP {} response", outcome.status);
    Ok(())
}
