// src/output.rs

//! Text-output channel to players.
//!
//! The host framework owns sessions and formatting; this crate only needs
//! somewhere to hand plain-text lines addressed to a character.

/// Destination for narrative text. Implemented by the embedding server; the
/// [`Transcript`] implementation backs tests.
pub trait OutputSink {
    fn send(&mut self, recipient: &str, text: &str);
}

/// In-memory sink recording every line sent.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<(String, String)>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines addressed to `recipient`, in send order.
    pub fn lines_for(&self, recipient: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(to, _)| to.eq_ignore_ascii_case(recipient))
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn all_lines(&self) -> &[(String, String)] {
        &self.lines
    }

    pub fn contains(&self, recipient: &str, needle: &str) -> bool {
        self.lines_for(recipient).iter().any(|l| l.contains(needle))
    }
}

impl OutputSink for Transcript {
    fn send(&mut self, recipient: &str, text: &str) {
        self.lines.push((recipient.to_string(), text.to_string()));
    }
}
