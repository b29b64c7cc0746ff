use super::*;

const WELCOME: &str = "Olá! Como posso ajudar?";

// --- seeding ---

#[test]
fn new_transcript_starts_with_welcome_bot_turn() {
    let transcript = Transcript::new(WELCOME);
    let turns = transcript.turns();
    assert_eq!(turns.len(), 1);
    assert!(turns[0].is_bot);
    assert_eq!(turns[0].text, WELCOME);
}

// --- push_user ---

#[test]
fn push_user_appends_trimmed_text() {
    let mut transcript = Transcript::new(WELCOME);
    let id = transcript.push_user("  Quero um orçamento  ", 10.0);
    assert!(id.is_some());
    let last = transcript.turns().last().unwrap();
    assert_eq!(last.text, "Quero um orçamento");
    assert!(!last.is_bot);
    assert_eq!(last.timestamp_ms, 10.0);
}

#[test]
fn push_user_empty_input_is_a_silent_noop() {
    let mut transcript = Transcript::new(WELCOME);
    assert!(transcript.push_user("", 0.0).is_none());
    assert!(transcript.push_user("   ", 0.0).is_none());
    assert!(transcript.push_user("\t\n", 0.0).is_none());
    assert_eq!(transcript.turns().len(), 1);
}

// --- ids ---

#[test]
fn ids_strictly_increase_across_interleaved_turns() {
    let mut transcript = Transcript::new(WELCOME);
    transcript.push_user("primeira", 1.0);
    transcript.push_bot("resposta".to_owned(), 2.0);
    transcript.push_user("segunda", 3.0);
    transcript.push_bot("resposta".to_owned(), 4.0);

    let ids: Vec<u64> = transcript.turns().iter().map(|t| t.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "ids not strictly increasing: {ids:?}");
    }
}

#[test]
fn ids_keep_increasing_when_bot_turns_arrive_out_of_order() {
    // Two pending replies landing after both user turns still get fresh ids.
    let mut transcript = Transcript::new(WELCOME);
    transcript.push_user("uma", 1.0);
    transcript.push_user("duas", 2.0);
    let b2 = transcript.push_bot("resposta da segunda".to_owned(), 3.0);
    let b1 = transcript.push_bot("resposta da primeira".to_owned(), 4.0);
    assert!(b1 > b2);
}

// --- reset ---

#[test]
fn reset_discards_session_and_reseeds() {
    let mut transcript = Transcript::new(WELCOME);
    transcript.push_user("oi", 1.0);
    transcript.push_bot("olá".to_owned(), 2.0);
    transcript.reset(WELCOME);
    assert_eq!(transcript.turns().len(), 1);
    assert!(transcript.turns()[0].is_bot);
}

// --- serde (persistence hook) ---

#[test]
fn transcript_round_trips_through_json() {
    let mut transcript = Transcript::new(WELCOME);
    transcript.push_user("oi", 1.0);
    transcript.push_bot("olá".to_owned(), 2.0);

    let json = serde_json::to_string(&transcript).unwrap();
    let mut restored: Transcript = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, transcript);

    // The id counter survives, so new turns stay strictly increasing.
    let next = restored.push_user("mais uma", 3.0).unwrap();
    assert!(next > transcript.turns().last().unwrap().id);
}
