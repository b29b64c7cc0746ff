//! Chat widget state: panel visibility, the transcript, the count of
//! replies still waiting on their typing delay, and the session counter
//! that invalidates in-flight deliveries after a reset.

use crate::chat::config::ChatConfig;
use crate::chat::replies::ReplyDecision;
use crate::chat::submission;
use crate::chat::transcript::Transcript;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    /// Whether the chat panel is expanded.
    pub open: bool,
    pub transcript: Transcript,
    /// Replies submitted but not yet delivered. Nonzero shows the typing
    /// indicator; each delivery decrements by one.
    pub pending_replies: u32,
    /// Advances on every reset. A delivery carrying an older session is
    /// stale and gets dropped.
    session: u64,
}

impl ChatState {
    #[must_use]
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            open: false,
            transcript: Transcript::new(&config.welcome),
            pending_replies: 0,
            session: 0,
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Append the user turn and decide its reply.
    ///
    /// Returns the session the delivery belongs to alongside the decision,
    /// or `None` for empty input (no state change).
    pub fn submit(
        &mut self,
        text: &str,
        config: &ChatConfig,
        timestamp_ms: f64,
    ) -> Option<(u64, ReplyDecision)> {
        let decision =
            submission::prepare_submission(&mut self.transcript, text, config, timestamp_ms)?;
        self.pending_replies += 1;
        Some((self.session, decision))
    }

    /// Deliver a pending reply. A delivery prepared before a reset carries
    /// an older session and is dropped; returns whether it was applied.
    pub fn deliver(&mut self, session: u64, decision: &ReplyDecision, timestamp_ms: f64) -> bool {
        if session != self.session {
            return false;
        }
        self.pending_replies = self.pending_replies.saturating_sub(1);
        submission::deliver_reply(&mut self.transcript, decision, timestamp_ms);
        true
    }

    /// Drop the session and reseed the welcome turn. Pending replies are
    /// cleared and the session counter advances, so an in-flight delivery
    /// from before the reset is dropped on arrival.
    pub fn reset(&mut self, config: &ChatConfig) {
        self.transcript.reset(&config.welcome);
        self.pending_replies = 0;
        self.session += 1;
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}
