use owo_colors::{OwoColorize, Style};

/// Terminal styling for prompts and the report.
///
/// A disabled palette returns text untouched, which is what pipes and
/// tests get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan())
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, Style::new().bold().underline())
    }

    /// Report labels are padded to a fixed column before styling.
    pub fn label(&self, text: &str) -> String {
        self.paint(&format!("{text:<30}"), Style::new().bold().yellow())
    }

    pub fn usd(&self, text: &str) -> String {
        self.paint(text, Style::new().green())
    }

    pub fn local(&self, text: &str) -> String {
        self.paint(text, Style::new().bright_blue())
    }

    pub fn summary(&self, text: &str) -> String {
        self.paint(text, Style::new().bold().green())
    }
}
