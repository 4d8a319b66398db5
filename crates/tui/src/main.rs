// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use doghouse_client::HttpBackend;
use doghouse_domain::BreedCatalog;
use doghouse_menu::StdConsole;
use doghouse_tui::{App, AppError, Args};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Logs go to stderr so they never interleave with the menus
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Doghouse terminated");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    info!(breeds = %args.breeds.display(), "Loading breed catalog");
    let catalog: BreedCatalog = BreedCatalog::load(&args.breeds)?;

    info!(server = %args.server, "Using backend");
    let backend: HttpBackend = HttpBackend::new(&args.server, args.timeout())?;

    let mut app: App<HttpBackend> = App::new(backend, catalog)?;
    let mut console: StdConsole = StdConsole::new();
    app.run(&mut console)
}
