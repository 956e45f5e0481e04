use crate::common::locale::{DisplayContext, Language};

/// Holds the current display context for a host that keeps it as UI state.
/// Each toggle swaps in a new context value; views receive copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageToggle {
    context: DisplayContext,
}

impl LanguageToggle {
    pub fn new(context: DisplayContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> DisplayContext {
        self.context
    }

    /// Flips language and text direction, returning the new context.
    pub fn toggle(&mut self) -> DisplayContext {
        self.context = self.context.toggled();
        tracing::debug!(
            language = %self.context.language,
            dir = self.context.direction().as_str(),
            "display language switched"
        );
        self.context
    }

    /// Tooltip for the toggle button, written in the language it switches to.
    pub fn title(&self) -> &'static str {
        match self.context.language {
            Language::Arabic => "Switch to English",
            Language::English => "التبديل إلى العربية",
        }
    }
}
