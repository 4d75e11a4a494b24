mod cli;

use anyhow::Result;
use breathe::cancel::CancelToken;
use breathe::config::SessionConfig;
use breathe::display::renderer::Renderer;
use breathe::session::runner::{SessionOutcome, run_session};
use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match SessionConfig::from_args(
        cli.duration.as_deref(),
        cli.pattern.as_deref(),
        cli.style.as_deref(),
    ) {
        Ok(config) => config,
        Err(error) => {
            println!("{error}");
            std::process::exit(1);
        }
    };

    // Ctrl+C flips the token; the session observes it at its next
    // suspension point and winds down cleanly with exit code 0.
    let cancel = CancelToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut renderer = Renderer::new();
    match run_session(&config, &mut renderer, &cancel).await {
        SessionOutcome::Completed => renderer.render_completed(),
        SessionOutcome::Interrupted => renderer.render_interrupted(),
    }
    Ok(())
}
