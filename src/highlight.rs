use inksac::prelude::*;

const PROMPT: &str = "$ ";

#[derive(Debug, Clone, Copy)]
pub struct PromptStyle {
    color_support: ColorSupport,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptStyle {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Prompt string shown before each interactive read.
    pub fn prompt(&self) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return PROMPT.to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Green).bold().build();
        PROMPT.style(prompt_style).to_string()
    }
}
