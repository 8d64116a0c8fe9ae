//! Locator terminal host.
//!
//! Reads locator input line by line from stdin and prints the resulting
//! view (input, ghost text, rows) and workspace actions to stdout. Logs go
//! to stderr, or to `LOCATOR_LOG_DIR` when set.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

mod cli;
mod repl;

use cli::Cli;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = cli.load_config()?;
	info!(base = %config.base_dir().display(), wildcards = config.wildcards, "starting locator");

	let stdin = std::io::stdin();
	let stdout = std::io::stdout();
	repl::run(&config, stdin.lock(), stdout.lock())
}

fn env_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
	use tracing_subscriber::EnvFilter;

	EnvFilter::try_from_env("LOCATOR_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("locator_engine=trace,debug")
			} else {
				EnvFilter::new("locator_engine=debug,info")
			}
		})
}

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::fmt::format::FmtSpan;
	use tracing_subscriber::prelude::*;

	if let Some(log_dir) = std::env::var("LOCATOR_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("locator.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_span_events(FmtSpan::CLOSE)
				.with_target(true);

			tracing_subscriber::registry().with(env_filter(verbose)).with(file_layer).init();

			info!(path = ?log_path, "locator tracing initialized");
			return;
		}
	}

	// stdout carries the view, so the fallback writes to stderr
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(verbose))
		.with_writer(std::io::stderr)
		.init();
}
