use super::*;

// --- email ---

#[test]
fn accepts_ordinary_emails() {
    assert!(is_valid_email("maria@empresa.com.br"));
    assert!(is_valid_email("joao.silva@vetorti.com.br"));
    assert!(is_valid_email("  contato@exemplo.com  "));
}

#[test]
fn rejects_missing_or_doubled_at_sign() {
    assert!(!is_valid_email("sem-arroba.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("@dominio.com"));
}

#[test]
fn rejects_dotless_domain_and_whitespace() {
    assert!(!is_valid_email("maria@localhost"));
    assert!(!is_valid_email("maria silva@empresa.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_short_tld() {
    assert!(!is_valid_email("maria@empresa.c"));
}

// --- phone ---

#[test]
fn accepts_mobile_and_landline_lengths() {
    assert!(is_valid_phone("11987654321"));
    assert!(is_valid_phone("1134567890"));
    assert!(is_valid_phone("(11) 98765-4321"));
    assert!(is_valid_phone("+55 11 98765-4321"));
}

#[test]
fn rejects_wrong_lengths() {
    assert!(!is_valid_phone("12345"));
    assert!(!is_valid_phone("119876543210"));
    assert!(!is_valid_phone(""));
}

#[test]
fn rejects_letters() {
    assert!(!is_valid_phone("11 CALL-ME-NOW"));
}
