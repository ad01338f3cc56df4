use anyhow::{Context, Result};
use clap::Parser;
use gitfinder::app::run_session;
use gitfinder::cli::CliArgs;
use gitfinder::config::{get_default_config_path, Config};
use gitfinder::scan::FsDiscoveryAdapter;
use gitfinder::tui::TuiView;
use gitfinder_core::ports::{DiscoverReq, DiscoveryPort};
use gitfinder_core::Outcome;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // Initialize tracing with env filter; stdout is reserved for the result
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            error!("Application error: {:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli_args = CliArgs::parse();
    let config = Config::from_cli_and_file(&cli_args)?;

    if cli_args.write_config {
        let path = match &cli_args.config {
            Some(path) => path.clone(),
            None => get_default_config_path()?,
        };
        config.save(&path)?;
        println!("{}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting gitfinder with roots {:?}", config.roots);

    let discovery = FsDiscoveryAdapter::new(config.scan.clone());
    let repositories = discovery
        .scan(DiscoverReq::new(config.roots.iter().cloned()))
        .context("Repository scan failed")?;

    if cli_args.list {
        for repo in &repositories {
            println!("{}\t{}", repo.name(), repo.path().display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    match run_session(repositories, TuiView::new(config.ui.show_paths))? {
        Outcome::Selected(repo) => {
            println!("{}", repo.path().display());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => {
            info!("Selection cancelled");
            Ok(ExitCode::from(1))
        }
    }
}
