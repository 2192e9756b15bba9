#![forbid(unsafe_code)]

//! # Counters
//!
//! Runs the class-style and hook-style counters in the terminal, or renders
//! them headlessly with `counters render`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p counters
//! cargo run -p counters -- --variant hook
//! cargo run -p counters -- render --clicks 3
//! ```

use anyhow::Context;
use teacup::Program;
use tracing::info;

use counters::cli::{Cli, Command};
use counters::{Config, Showcase, logging, render_after_clicks};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(&cli).context("failed to load configuration")?;
    logging::init(&config).context("failed to set up logging")?;
    info!(?config, "starting counters");

    match &cli.command {
        Some(Command::Render(args)) => {
            let screen =
                render_after_clicks(Showcase::from_config(&config), args.clicks, args.target);
            println!("{screen}");
        }
        None => run_interactive(&config)?,
    }

    Ok(())
}

fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let mut program = Program::new(Showcase::from_config(config)).with_fps(config.fps);
    if config.alt_screen {
        program = program.with_alt_screen();
    }
    if config.mouse {
        program = program.with_mouse();
    }
    if !config.color {
        program = program.without_color();
    }

    let showcase = program.run().context("terminal UI failed")?;
    info!(counts = ?showcase.counts(), "exited");
    println!("{}", showcase.summary());
    Ok(())
}
