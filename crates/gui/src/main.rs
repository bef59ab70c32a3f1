use replay::Config;
use tracing_subscriber::EnvFilter;

mod gui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let moves = config.line.move_list()?;
    tracing::info!(line = ?config.line, undo = config.undo_enabled, "starting window");
    gui::run(config, moves)?;
    Ok(())
}
