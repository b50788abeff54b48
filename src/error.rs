//! Unified error types for the scraper.

use std::fmt;

/// Errors that abort a scrape run.
///
/// Malformed color declarations are not errors — they degrade to the
/// sentinel color inside [`crate::color::extract_color`]. Only unreadable
/// input and unbalanced markup terminate the run.
#[derive(Debug)]
pub enum ScrapeError {
    /// The input document could not be read.
    Io(std::io::Error),
    /// A close event arrived while the tag stack was already empty.
    UnbalancedClose(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::UnbalancedClose(tag) => {
                write!(f, "unbalanced markup: close tag </{tag}> with no open frame")
            }
        }
    }
}

impl std::error::Error for ScrapeError {}

impl From<std::io::Error> for ScrapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
