use super::*;

fn config() -> ChatConfig {
    ChatConfig::default()
}

// --- purity ---

#[test]
fn same_input_always_yields_same_decision() {
    let config = config();
    let a = select_reply("Quero um orçamento", &config);
    let b = select_reply("Quero um orçamento", &config);
    assert_eq!(a, b);
}

// --- quote requests ---

#[test]
fn quote_request_redirects_to_contact_route() {
    let config = config();
    let decision = select_reply("Quero um orçamento", &config);
    assert_eq!(
        decision.side_effect,
        Some(SideEffect::NavigateInternal(config.contact_route.clone()))
    );
    assert!(decision.text.to_lowercase().contains("orçamento"));
}

#[test]
fn unaccented_orcamento_also_matches() {
    let config = config();
    let decision = select_reply("preciso de um ORCAMENTO urgente", &config);
    assert_eq!(decision.side_effect, Some(SideEffect::NavigateInternal(config.contact_route)));
}

// --- plans ---

#[test]
fn plans_reply_enumerates_all_three_tiers_with_prices() {
    let decision = select_reply("Sobre os planos", &config());
    assert!(decision.side_effect.is_none());
    for needle in ["Essencial", "Profissional", "Corporativo", "R$ 490", "R$ 990", "R$ 1.890"] {
        assert!(decision.text.contains(needle), "missing {needle:?} in {:?}", decision.text);
    }
}

// --- support ---

#[test]
fn support_request_redirects_to_support_route() {
    let config = config();
    let decision = select_reply("estou com um problema no servidor", &config);
    assert_eq!(decision.side_effect, Some(SideEffect::NavigateInternal(config.support_route)));
}

// --- products ---

#[test]
fn product_request_opens_the_storefront() {
    let config = config();
    let decision = select_reply("Ver produtos", &config);
    assert_eq!(decision.side_effect, Some(SideEffect::NavigateExternal(config.storefront_url)));
}

// --- contact ---

#[test]
fn contact_request_opens_a_whatsapp_deep_link() {
    let decision = select_reply("quero falar com alguém", &config());
    match decision.side_effect {
        Some(SideEffect::NavigateExternal(url)) => {
            assert!(url.starts_with("https://wa.me/5511987654321?text="), "{url}");
        }
        other => panic!("expected external navigation, got {other:?}"),
    }
}

// --- priority ---

#[test]
fn quote_outranks_plans_when_both_keywords_appear() {
    let config = config();
    let decision = select_reply("quero um orçamento do plano profissional", &config);
    assert_eq!(decision.side_effect, Some(SideEffect::NavigateInternal(config.contact_route)));
}

// --- fallback ---

#[test]
fn unrecognized_input_gets_the_fallback_with_no_side_effect() {
    let decision = select_reply("xyzzy", &config());
    assert!(decision.side_effect.is_none());
    assert!(decision.text.contains("orçamentos"));
}

#[test]
fn matching_is_case_insensitive() {
    let config = config();
    let lower = select_reply("suporte", &config);
    let upper = select_reply("SUPORTE", &config);
    assert_eq!(lower, upper);
}
