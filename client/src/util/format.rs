//! Display formatting for Brazilian currency, phone numbers, and the
//! WhatsApp deep link.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price in centavos as Brazilian reais, e.g. `R$ 1.890`.
///
/// Whole-real prices drop the centavo part; fractional prices keep two
/// digits with the Brazilian decimal comma.
#[must_use]
pub fn format_brl(cents: u64) -> String {
    let reais = cents / 100;
    let centavos = cents % 100;
    let whole = group_thousands(reais);
    if centavos == 0 {
        format!("R$ {whole}")
    } else {
        format!("R$ {whole},{centavos:02}")
    }
}

/// Insert `.` thousands separators into a whole number.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a digits-only Brazilian phone number for display.
///
/// Handles 11-digit mobile (`(11) 98765-4321`) and 10-digit landline
/// (`(11) 3456-7890`) numbers, with or without the country code 55.
/// Anything else is returned unchanged.
#[must_use]
pub fn format_phone_br(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let national = digits.strip_prefix("55").filter(|rest| rest.len() >= 10).unwrap_or(&digits);

    match national.len() {
        11 => format!("({}) {}-{}", &national[..2], &national[2..7], &national[7..]),
        10 => format!("({}) {}-{}", &national[..2], &national[2..6], &national[6..]),
        _ => raw.to_owned(),
    }
}

/// Build a `wa.me` deep link with a URL-encoded preset message.
#[must_use]
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}
