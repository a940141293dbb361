//! Interactive launcher for containerized Minecraft servers.

#![deny(rust_2018_idioms)]
#![warn(missing_docs, clippy::all)]

mod app;
mod cli;
mod common;
mod docker;
mod minecraft;
mod prompt;
mod store;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

fn install_tracing(verbose: u8) {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let default_filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(ErrorLayer::default())
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = cli::Mclaunch::parse();
    install_tracing(args.verbose);

    app::run(args).await
}
