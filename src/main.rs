use anyhow::Result;
use chessplay::{AppConfig, Args, Session, SessionEnd};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_args(&args)?;

    // --log or the config file win over RUST_LOG
    let filter = match &config.log {
        Some(filter) => EnvFilter::try_new(filter)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting {:?} game, AI depth {}",
        config.mode,
        config.ai_config().effective_depth()
    );

    let game = config.new_game()?;
    let stdin = io::stdin();
    let mut session =
        Session::new(game, stdin.lock(), io::stdout()).with_max_plies(config.max_plies);

    match session.run()? {
        SessionEnd::Finished(state) => info!("Game over: {}", state),
        SessionEnd::Quit => info!("Player quit"),
        SessionEnd::InputClosed => info!("Input closed"),
        SessionEnd::PlyLimit => info!("Ply limit reached"),
    }
    Ok(())
}
