//! CLI argument parsing via clap.

use clap::Parser;

/// Extract terminal color themes from a saved Gogh listing page and print
/// them as shell-export blocks.
#[derive(Debug, Parser)]
#[command(name = "gogh2dwm", version)]
pub struct Args {
    /// Path to the saved HTML page.
    #[arg(long = "file", default_value = "index.html")]
    pub file: String,
}
