//! Stack of open HTML elements inside a theme block.

/// One open HTML element as seen by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFrame {
    pub name: String,
    /// `None` when the tag carried no attributes at all. The scraper's
    /// frame-equality checks rely on this distinction.
    pub attrs: Option<Vec<(String, String)>>,
}

/// Ordered stack of [`TagFrame`]s.
///
/// Non-empty exactly while the scraper is inside a theme block; draining to
/// zero is the sole signal that the block closed.
#[derive(Debug, Default)]
pub struct TagTracker {
    stack: Vec<TagFrame>,
}

impl TagTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, attrs: &[(String, String)]) {
        let attrs = if attrs.is_empty() {
            None
        } else {
            Some(attrs.to_vec())
        };
        self.stack.push(TagFrame {
            name: name.to_string(),
            attrs,
        });
    }

    /// Pop the most recently opened frame. `None` means a close event with
    /// no matching open; callers treat that as fatal.
    pub fn pop(&mut self) -> Option<TagFrame> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&TagFrame> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
