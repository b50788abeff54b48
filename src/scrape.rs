//! Theme extraction state machine.
//!
//! An html5ever tokenizer drives three handlers (tag-open, tag-close, text)
//! in document order over one in-memory page. A theme block opens when a
//! tag's first attribute pair is exactly `class="terminal"`; while inside,
//! open tags are tracked on an explicit stack, and the stack draining to
//! zero is the sole signal that the block closed.
//!
//! The raw tokenizer is used instead of a DOM on purpose: the markup shape
//! checks below depend on attribute order, which a tree layer does not
//! preserve. It also means no tags are implied and void elements get no
//! synthetic close events, so unbalanced markup stays unbalanced.

use std::cell::RefCell;

use html5ever::buffer_queue::BufferQueue;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::color::{extract_color, FALLBACK_COLOR};
use crate::error::ScrapeError;
use crate::tracker::TagTracker;

/// One extracted terminal color scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub bg_color: String,
    /// Palette entries, in document order.
    pub colors: Vec<String>,
}

fn pair_is(attr: &(String, String), key: &str, value: &str) -> bool {
    attr.0 == key && attr.1 == value
}

/// Scrape context: the single in-progress theme, its tag stack, the themes
/// completed so far, and a fault slot that stops processing once set.
///
/// At most one theme is under construction at a time. A terminal marker
/// opening while a theme is already live silently resets it; nested
/// terminal blocks are malformed input with no further semantics.
#[derive(Debug, Default)]
pub struct ThemeScraper {
    theme: Option<Theme>,
    tracker: Option<TagTracker>,
    completed: Vec<Theme>,
    fault: Option<ScrapeError>,
    /// True while the previous event was title text with no tag event in
    /// between. The tokenizer splits one text node into several character
    /// tokens around character references; those chunks append rather than
    /// overwrite.
    title_run: bool,
}

impl ThemeScraper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a start-tag event. A self-closing start tag counts as an open
    /// immediately followed by a close.
    pub fn on_tag_open(&mut self, name: &str, attrs: &[(String, String)], self_closing: bool) {
        if self.fault.is_some() {
            return;
        }
        self.title_run = false;

        if attrs
            .first()
            .is_some_and(|a| pair_is(a, "class", "terminal"))
        {
            if self.theme.is_some() {
                tracing::warn!(tag = name, "nested terminal block resets the current theme");
            }
            self.theme = Some(Theme::default());
            self.tracker = Some(TagTracker::new());
        }

        let Some(tracker) = self.tracker.as_mut() else {
            return;
        };
        tracker.push(name, attrs);

        if let (Some(theme), Some(first)) = (self.theme.as_mut(), attrs.first()) {
            // Expected shape: the body-styling tag carries exactly a class
            // marker and a background style string, in that order.
            if pair_is(first, "class", "body") {
                theme.bg_color = match attrs.get(1) {
                    Some((_, style)) => extract_color(style),
                    None => {
                        tracing::warn!(
                            tag = name,
                            "body tag without a style attribute, using fallback background"
                        );
                        FALLBACK_COLOR.to_string()
                    }
                };
            }
            if name == "p" && first.0 == "style" {
                theme.colors.push(extract_color(&first.1));
            }
        }

        if self_closing {
            self.on_tag_close(name);
        }
    }

    /// Handle an end-tag event. Draining the stack finalizes the theme.
    pub fn on_tag_close(&mut self, name: &str) {
        if self.fault.is_some() {
            return;
        }
        self.title_run = false;
        let Some(tracker) = self.tracker.as_mut() else {
            return;
        };
        if tracker.pop().is_none() {
            self.fault = Some(ScrapeError::UnbalancedClose(name.to_string()));
            return;
        }
        if tracker.is_empty() {
            if let Some(theme) = self.theme.take() {
                tracing::debug!(name = %theme.name, colors = theme.colors.len(), "theme complete");
                self.completed.push(theme);
            }
            self.tracker = None;
        }
    }

    /// Handle a text event. The theme name is the text of the frame whose
    /// attributes are exactly `class="bar__title"`; the last such text node
    /// wins. Consecutive text events with no tag event between them are
    /// chunks of the same node and concatenate.
    pub fn on_text(&mut self, data: &str) {
        if self.fault.is_some() {
            return;
        }
        let (Some(theme), Some(tracker)) = (self.theme.as_mut(), self.tracker.as_ref()) else {
            return;
        };
        let Some(frame) = tracker.top() else {
            return;
        };
        if let Some([(key, value)]) = frame.attrs.as_deref() {
            if key == "class" && value == "bar__title" {
                if self.title_run {
                    theme.name.push_str(data);
                } else {
                    theme.name = data.to_string();
                    self.title_run = true;
                }
            }
        }
    }

    /// Consume the context, returning completed themes in document order or
    /// the recorded fault.
    pub fn finish(self) -> Result<Vec<Theme>, ScrapeError> {
        match self.fault {
            Some(err) => Err(err),
            None => Ok(self.completed),
        }
    }
}

/// html5ever sink forwarding tokenizer events into a [`ThemeScraper`]. The
/// tokenizer calls `process_token` through `&self`, hence the `RefCell`.
struct ThemeSink {
    scraper: RefCell<ThemeScraper>,
}

impl TokenSink for ThemeSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let mut scraper = self.scraper.borrow_mut();
        match token {
            Token::TagToken(tag) => {
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::StartTag => {
                        let attrs: Vec<(String, String)> = tag
                            .attrs
                            .iter()
                            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                            .collect();
                        scraper.on_tag_open(&name, &attrs, tag.self_closing);
                    }
                    TagKind::EndTag => scraper.on_tag_close(&name),
                }
            }
            Token::CharacterTokens(data) => scraper.on_text(&data),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize `html` and return the themes found, in document order.
pub fn scrape_document(html: &str) -> Result<Vec<Theme>, ScrapeError> {
    let sink = ThemeSink {
        scraper: RefCell::new(ThemeScraper::new()),
    };
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.scraper.into_inner().finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_extracts_name_background_and_palette() {
        let html = r#"
            <div class="terminal">
              <div class="bar__title">Dracula</div>
              <div class="body" style="background-color: rgb(40,42,54);">
                <p style="color: rgb(255,0,0);"></p>
                <p style="color: rgb(0,255,0);"></p>
              </div>
            </div>
        "#;

        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].name, "Dracula");
        assert_eq!(themes[0].bg_color, "#282a36");
        assert_eq!(themes[0].colors, vec!["#ff0000", "#00ff00"]);
    }

    #[test]
    fn multiple_blocks_come_out_in_document_order() {
        let html = r#"
            <div class="terminal"><div class="bar__title">First</div></div>
            <div class="terminal"><div class="bar__title">Second</div></div>
            <div class="terminal"><div class="bar__title">Third</div></div>
        "#;

        let themes = scrape_document(html).expect("scrape");
        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn content_outside_terminal_blocks_is_ignored() {
        let html = r#"
            <p style="color: rgb(1, 2, 3);">stray swatch</p>
            <div class="bar__title">stray title</div>
        "#;
        assert!(scrape_document(html).expect("scrape").is_empty());
    }

    #[test]
    fn terminal_marker_must_be_first_attribute() {
        let html = r#"<div id="x" class="terminal"><p style="color: rgb(1, 2, 3);"></p></div>"#;
        assert!(scrape_document(html).expect("scrape").is_empty());
    }

    #[test]
    fn body_without_style_attribute_falls_back() {
        let html = r#"<div class="terminal"><div class="body"></div></div>"#;
        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].bg_color, FALLBACK_COLOR);
    }

    #[test]
    fn malformed_swatch_declaration_degrades_to_sentinel() {
        let html = r#"<div class="terminal"><p style="color: hsl(0, 0%, 0%);"></p></div>"#;
        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes[0].colors, vec![FALLBACK_COLOR]);
    }

    #[test]
    fn paragraph_without_leading_style_attribute_is_not_a_swatch() {
        let html = r#"<div class="terminal"><p class="x" style="color: rgb(1, 2, 3);"></p></div>"#;
        let themes = scrape_document(html).expect("scrape");
        assert!(themes[0].colors.is_empty());
    }

    #[test]
    fn entity_in_title_keeps_the_full_name() {
        // The tokenizer emits "Black ", "&", " White" as separate character
        // tokens; they are chunks of one text node.
        let html = r#"<div class="terminal"><div class="bar__title">Black &amp; White</div></div>"#;
        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes[0].name, "Black & White");
    }

    #[test]
    fn later_title_text_node_still_replaces_an_earlier_one() {
        let html = r#"<div class="terminal"><div class="bar__title">First<b></b>Second</div></div>"#;
        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes[0].name, "Second");
    }

    #[test]
    fn title_frame_with_extra_attributes_does_not_name_the_theme() {
        let html = r#"<div class="terminal"><div class="bar__title" id="t">Ignored</div></div>"#;
        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes[0].name, "");
    }

    #[test]
    fn self_closing_terminal_tag_emits_an_empty_theme() {
        let themes = scrape_document(r#"<div class="terminal"/>"#).expect("scrape");
        assert_eq!(themes, vec![Theme::default()]);
    }

    #[test]
    fn nested_terminal_marker_resets_the_live_theme() {
        // Malformed input; only the inner block survives.
        let html = r#"
            <div class="terminal">
              <div class="bar__title">Outer</div>
              <div class="terminal"><div class="bar__title">Inner</div></div>
            </div>
        "#;
        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].name, "Inner");
    }

    #[test]
    fn close_events_after_going_idle_are_ignored() {
        let html = r#"<div class="terminal"></div></section></article>"#;
        let themes = scrape_document(html).expect("scrape");
        assert_eq!(themes.len(), 1);
    }

    #[test]
    fn underflow_surfaces_as_unbalanced_close() {
        let mut scraper = ThemeScraper::new();
        scraper.on_tag_open("div", &[("class".into(), "terminal".into())], false);
        scraper.on_tag_close("div");
        // Force a close against a live-but-empty tracker.
        scraper.tracker = Some(TagTracker::new());
        scraper.on_tag_close("span");
        let err = scraper.finish().expect_err("fault");
        assert!(err.to_string().contains("</span>"), "got: {err}");
    }
}
