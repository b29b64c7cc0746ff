//! The submission pipeline shared by the chat widget and its tests.
//!
//! A submission appends the user turn and decides its reply immediately;
//! only delivery is delayed. Because the decision is derived from the
//! submitted text and travels with its own delayed task, concurrent
//! submissions stay paired with their own replies even when deliveries
//! arrive in swapped order.

use crate::chat::config::ChatConfig;
use crate::chat::replies::{select_reply, ReplyDecision};
use crate::chat::transcript::Transcript;

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

/// Append a user turn and decide its reply.
///
/// Returns `None` for empty or whitespace-only input, leaving the
/// transcript unchanged.
pub fn prepare_submission(
    transcript: &mut Transcript,
    text: &str,
    config: &ChatConfig,
    timestamp_ms: f64,
) -> Option<ReplyDecision> {
    transcript.push_user(text, timestamp_ms)?;
    Some(select_reply(text, config))
}

/// Deliver a previously prepared reply as a bot turn.
pub fn deliver_reply(
    transcript: &mut Transcript,
    decision: &ReplyDecision,
    timestamp_ms: f64,
) -> u64 {
    transcript.push_bot(decision.text.clone(), timestamp_ms)
}
