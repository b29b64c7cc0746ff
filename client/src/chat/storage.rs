//! Transcript persistence in `localStorage`.
//!
//! The transcript is saved after every appended turn and restored once on
//! mount, so a page reload resumes the conversation where it left off.
//! Requires a browser environment; on the server every call is a no-op.

use crate::chat::transcript::Transcript;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "vetor_ti_chat_transcript";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Restore a previously saved transcript, if one exists and still parses.
pub fn load() -> Option<Transcript> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let json = storage.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&json) {
            Ok(transcript) => Some(transcript),
            Err(err) => {
                // A stale or corrupt entry should not wedge the widget.
                log::warn!("discarding unreadable saved transcript: {err}");
                let _ = storage.remove_item(STORAGE_KEY);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the transcript. Quota or serialization failures are ignored.
pub fn save(transcript: &Transcript) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(json) = serde_json::to_string(transcript) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = transcript;
    }
}

/// Drop the saved transcript, used when the user starts a fresh session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
