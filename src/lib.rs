//! gogh2dwm — extract terminal color themes from a saved Gogh listing page.
//!
//! The Gogh project renders every theme on its listing page as a styled
//! preview block. This crate tokenizes one such page, collects a name, a
//! background color, and an ordered palette per block, and renders each
//! theme as a block of `LOCAL_DWM_*` shell exports.
//!
//! # Quick start
//!
//! ```no_run
//! use gogh2dwm::render::render_theme;
//! use gogh2dwm::scrape::scrape_document;
//!
//! # fn example() -> Result<(), gogh2dwm::error::ScrapeError> {
//! let html = std::fs::read_to_string("index.html")?;
//! for theme in scrape_document(&html)? {
//!     print!("{}", render_theme(&theme));
//! }
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
pub mod render;
pub mod scrape;
pub mod tracker;
