use super::first_error;

#[test]
fn complete_form_passes() {
    let error = first_error(
        "Maria",
        "maria@empresa.com.br",
        "(11) 98765-4321",
        "Preciso de um orçamento.",
    );
    assert!(error.is_none());
}

#[test]
fn phone_is_optional_but_validated_when_present() {
    assert!(first_error("Maria", "maria@empresa.com.br", "", "Olá.").is_none());
    assert!(first_error("Maria", "maria@empresa.com.br", "123", "Olá.").is_some());
}

#[test]
fn reports_the_first_missing_field() {
    assert_eq!(first_error("", "", "", ""), Some("Informe o seu nome."));
    assert_eq!(first_error("Maria", "ruim", "", ""), Some("Informe um e-mail válido."));
    assert_eq!(
        first_error("Maria", "maria@empresa.com.br", "", ""),
        Some("Escreva uma mensagem.")
    );
}
