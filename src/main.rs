//! CLI entry point for gogh2dwm.

mod cli;

use clap::Parser;
use gogh2dwm::render::render_theme;
use gogh2dwm::scrape::scrape_document;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();

    // Diagnostics go to stderr; stdout is the shell-export stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    tracing::debug!(file = %args.file, "reading themes page");

    let html = match fs::read_to_string(&args.file) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", args.file);
            std::process::exit(1);
        }
    };

    let themes = match scrape_document(&html) {
        Ok(themes) => themes,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!(themes = themes.len(), "scrape complete");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for theme in &themes {
        if let Err(e) = out.write_all(render_theme(theme).as_bytes()) {
            eprintln!("error: failed to write output: {e}");
            std::process::exit(1);
        }
    }
}
