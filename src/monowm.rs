use std::process::ExitCode;

use anyhow::Context;
use monowm::config::Config;
use monowm::session::X11Session;
use monowm::wm::WindowManager;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn run(config: &Config) -> anyhow::Result<()> {
    let session = X11Session::open(config).context("failed to open display")?;
    let mut manager = WindowManager::new(session).context("failed to start window manager")?;
    manager.run();
    manager.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::default();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
