//! Plain text block

/// A run of literal template text, rendered verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Raw text exactly as it appeared in the template
    pub content: String,
}

impl TextBlock {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
