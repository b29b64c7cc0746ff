use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// A single turn in the chat transcript.
///
/// Turns are immutable once appended; they are removed only when the whole
/// transcript is reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: u64,
    pub text: String,
    pub is_bot: bool,
    pub timestamp_ms: f64,
}

/// Ordered chat transcript with a monotonic turn-id counter.
///
/// Always starts with one seeded bot welcome turn. Insertion order is
/// display order, and ids are strictly increasing no matter how user and
/// bot turns interleave.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
    next_id: u64,
}

impl Transcript {
    /// A fresh transcript seeded with the bot welcome turn.
    #[must_use]
    pub fn new(welcome: &str) -> Self {
        let mut transcript = Self { turns: Vec::new(), next_id: 0 };
        transcript.push_bot(welcome.to_owned(), 0.0);
        transcript
    }

    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Append a user turn. Empty or whitespace-only input is a silent
    /// no-op and returns `None`; otherwise the trimmed text is appended
    /// and its turn id returned.
    pub fn push_user(&mut self, text: &str, timestamp_ms: f64) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.push(trimmed.to_owned(), false, timestamp_ms))
    }

    /// Append a bot turn.
    pub fn push_bot(&mut self, text: String, timestamp_ms: f64) -> u64 {
        self.push(text, true, timestamp_ms)
    }

    /// Discard the session and reseed with the welcome turn.
    pub fn reset(&mut self, welcome: &str) {
        *self = Self::new(welcome);
    }

    fn push(&mut self, text: String, is_bot: bool, timestamp_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.turns.push(ChatTurn { id, text, is_bot, timestamp_ms });
        id
    }
}
