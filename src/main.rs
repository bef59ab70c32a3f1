use replay::Config;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub mod tui;

fn main() -> anyhow::Result<()> {
    // The alternate screen owns stdout, so logs go to a file.
    let log_file = File::create("replay.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let config = Config::from_env()?;
    let moves = config.line.move_list()?;
    tui::run(config, moves)?;
    Ok(())
}
