//! CSS color-declaration decoding.
//!
//! The Gogh page styles each palette swatch with a declaration like
//! `color: rgb(189, 0, 19);`. Decoding never fails: anything that does not
//! match the expected shape degrades to a sentinel color that is easy to
//! spot in a terminal.

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel emitted when a declaration cannot be decoded.
pub const FALLBACK_COLOR: &str = "#fa17ed";

/// Matches the value side of a declaration, e.g. ` rgb(31, 29, 69);`.
/// Whitespace after the commas is optional; the page is not consistent
/// about it.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\);$").expect("valid rgb pattern")
});

/// Decode a `<property>: rgb(R, G, B);` declaration into lowercase
/// `#rrggbb`.
///
/// Only the segment between the first and second colon is examined, so the
/// property name is arbitrary. Channel values are not clamped: anything
/// above 255 simply widens past two hex digits.
pub fn extract_color(s: &str) -> String {
    let Some(value) = s.split(':').nth(1) else {
        return FALLBACK_COLOR.to_string();
    };
    let Some(caps) = RGB_RE.captures(value) else {
        return FALLBACK_COLOR.to_string();
    };
    let (Ok(r), Ok(g), Ok(b)) = (
        caps[1].parse::<u128>(),
        caps[2].parse::<u128>(),
        caps[3].parse::<u128>(),
    ) else {
        // Digit runs too long even for u128. Degrade like any other mismatch.
        return FALLBACK_COLOR.to_string();
    };
    format!("#{r:02x}{g:02x}{b:02x}")
}
