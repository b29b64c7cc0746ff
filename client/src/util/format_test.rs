use super::*;

// --- format_brl ---

#[test]
fn whole_real_prices_drop_centavos() {
    assert_eq!(format_brl(49_000), "R$ 490");
    assert_eq!(format_brl(99_000), "R$ 990");
}

#[test]
fn thousands_get_dot_separators() {
    assert_eq!(format_brl(189_000), "R$ 1.890");
    assert_eq!(format_brl(123_456_700), "R$ 1.234.567");
}

#[test]
fn fractional_prices_keep_two_digits_with_comma() {
    assert_eq!(format_brl(1_990), "R$ 19,90");
    assert_eq!(format_brl(100_005), "R$ 1.000,05");
}

#[test]
fn zero_is_plain() {
    assert_eq!(format_brl(0), "R$ 0");
}

// --- format_phone_br ---

#[test]
fn mobile_numbers_format_with_five_digit_prefix() {
    assert_eq!(format_phone_br("11987654321"), "(11) 98765-4321");
}

#[test]
fn landline_numbers_format_with_four_digit_prefix() {
    assert_eq!(format_phone_br("1134567890"), "(11) 3456-7890");
}

#[test]
fn country_code_and_punctuation_are_stripped() {
    assert_eq!(format_phone_br("+55 (11) 98765-4321"), "(11) 98765-4321");
}

#[test]
fn unrecognized_lengths_pass_through() {
    assert_eq!(format_phone_br("12345"), "12345");
}

// --- whatsapp_link ---

#[test]
fn whatsapp_link_encodes_the_message() {
    let link = whatsapp_link("5511987654321", "Olá! Vim pelo site da Vetor TI.");
    assert!(link.starts_with("https://wa.me/5511987654321?text="));
    assert!(!link.contains(' '), "spaces must be percent-encoded: {link}");
    assert!(link.contains("Ol%C3%A1"), "{link}");
}
