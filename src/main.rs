mod app;
mod config;
mod data;
mod error;
mod pipeline;
mod present;
mod report;
mod ui;

use anyhow::Result;
use clap::Parser;

use config::Config;
use present::{HeadlessPresenter, Presenter, WindowPresenter};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    log::debug!("{config:?}");

    let mut presenter: Box<dyn Presenter> = if config.headless {
        Box::new(HeadlessPresenter)
    } else {
        Box::new(WindowPresenter::new("Proportion plot"))
    };

    let stdout = std::io::stdout();
    pipeline::run(&config, presenter.as_mut(), &mut stdout.lock())?;
    Ok(())
}
