use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use launchfinder::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (bundled defaults + optional user file)
    let mut config = Config::new()?;
    if let Some(api_url) = &args.api_url {
        config.api.base_url = api_url.clone();
    }

    let tick_rate = args.tick_rate;
    let frame_rate = args.frame_rate;

    let mut runner = {
        let tui = Arc::new(Mutex::new(
            RealTui::new()?.tick_rate(tick_rate).frame_rate(frame_rate),
        ));
        AppRunner::new_with_real(config, tui)
            .await?
            .with_initial_location(args.initial_location())
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
