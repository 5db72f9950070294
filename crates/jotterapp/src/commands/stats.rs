use crate::commands::{CmdMessage, CmdResult};

/// Word and character counts of a body of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
}

impl TextStats {
    /// Words are whitespace separated; characters are counted on the trimmed text.
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            chars: text.trim().chars().count(),
        }
    }
}

impl std::fmt::Display for TextStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Words: {} | Characters: {}", self.words, self.chars)
    }
}

pub fn run(body: &str) -> CmdResult {
    let stats = TextStats::of(body);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(stats.to_string()));
    result.stats = Some(stats);
    result
}
