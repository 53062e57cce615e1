mod error;

use chrono::Local;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use linka_core::Bot;

use crate::error::{RunError, exit_code};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Seed the environment before the log filter is read from it.
    let dotenv = linka_config::load_dotenv();

    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "linka air-quality bot");

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(dotenv).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(
    dotenv: Result<Option<std::path::PathBuf>, linka_config::ConfigError>,
) -> Result<(), RunError> {
    match dotenv? {
        Some(path) => info!(path = %path.display(), "loaded environment file"),
        None => tracing::debug!("no .env file found"),
    }

    let config = linka_config::load_bot_config()?;
    let bot = Bot::new(config)?;

    let outcome = bot.run(Local::now().naive_local()).await?;

    // A failed post is reported but does not fail the run.
    match outcome.post {
        Ok(status) => info!(
            id = %status.id_str,
            screen_name = %outcome.account.screen_name,
            "status posted"
        ),
        Err(e) => {
            error!(error = %e, "status update failed");
            warn!("report that was not posted:\n{}", outcome.report);
            let err = RunError::from(e);
            debug_assert_eq!(err.exit_code(), exit_code::SUCCESS);
            eprintln!("{:?}", miette::Report::new(err));
        }
    }

    Ok(())
}
