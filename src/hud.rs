//! Score display
//!
//! The page shows a single line of text, refreshed at startup and on
//! every score change.

/// Label shown before the score
pub const SCORE_LABEL: &str = "Score";

/// Text for the score display
pub fn score_text(score: u32) -> String {
    format!("{SCORE_LABEL}: {score}")
}

/// Text sink for the score line
pub trait ScoreBoard {
    fn show(&mut self, text: &str);
}

/// Keeps every line shown (headless runs and tests)
#[derive(Debug, Default)]
pub struct ScoreLog {
    pub lines: Vec<String>,
}

impl ScoreLog {
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl ScoreBoard for ScoreLog {
    fn show(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// `#scoreBoard` element on the page
#[cfg(target_arch = "wasm32")]
pub struct DomScoreBoard {
    element: web_sys::Element,
}

#[cfg(target_arch = "wasm32")]
impl DomScoreBoard {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreBoard for DomScoreBoard {
    fn show(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}
