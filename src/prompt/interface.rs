//! Pure interfaces for prompting without external dependencies

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone, PartialEq)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
}

impl TextPromptConfig {
    pub fn new<S: Into<String>>(prompt: S) -> Self {
        Self { prompt: prompt.into(), default: None }
    }

    pub fn with_default<S: Into<String>>(mut self, default: S) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

impl<T: TextPrompter + ?Sized> TextPrompter for &T {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        (**self).prompt_text(config)
    }
}
