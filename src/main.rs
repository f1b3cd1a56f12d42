// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use repo_visualiser_core::{
    presentation::cli::{Args, build_config},
    run_with_config,
};
use tracing::{level_filters::LevelFilter, subscriber::set_global_default};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: LevelFilter) {
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    // already set when embedded in tests
    let _ = set_global_default(subscriber);
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());

    let result = build_config(args).and_then(|config| run_with_config(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
