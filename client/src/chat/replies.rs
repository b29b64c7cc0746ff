//! Canned reply selection: an ordered keyword table over the lower-cased
//! input, first match wins. [`select_reply`] is pure, so the widget can
//! derive each pending reply from its own submitted text no matter when
//! the delay timer fires.

use crate::chat::config::ChatConfig;
use crate::content;
use crate::util::format::{format_brl, whatsapp_link};

#[cfg(test)]
#[path = "replies_test.rs"]
mod replies_test;

/// Navigation triggered alongside a canned reply. Fire-and-forget: a
/// blocked popup leaves the conversation unaffected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    NavigateInternal(String),
    NavigateExternal(String),
}

/// The reply text plus an optional navigation side effect.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyDecision {
    pub text: String,
    pub side_effect: Option<SideEffect>,
}

impl ReplyDecision {
    fn plain(text: String) -> Self {
        Self { text, side_effect: None }
    }
}

/// Keyword groups in priority order. Quote/budget requests outrank plan
/// questions, so an input mentioning both resolves to the quote reply.
const QUOTE_KEYWORDS: &[&str] = &["orçamento", "orcamento", "proposta"];
const PLAN_KEYWORDS: &[&str] = &["plano"];
const SUPPORT_KEYWORDS: &[&str] = &["suporte", "problema", "erro"];
const PRODUCT_KEYWORDS: &[&str] = &["produto", "loja"];
const CONTACT_KEYWORDS: &[&str] = &["whatsapp", "contato", "falar", "conversar"];

/// Derive the canned reply for a user input.
#[must_use]
pub fn select_reply(input: &str, config: &ChatConfig) -> ReplyDecision {
    let input = input.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| input.contains(k));

    if matches(QUOTE_KEYWORDS) {
        return ReplyDecision {
            text: "Perfeito! Vou te levar para a nossa página de contato para montarmos o seu \
                   orçamento sem compromisso."
                .to_owned(),
            side_effect: Some(SideEffect::NavigateInternal(config.contact_route.clone())),
        };
    }

    if matches(PLAN_KEYWORDS) {
        return ReplyDecision::plain(plans_summary());
    }

    if matches(SUPPORT_KEYWORDS) {
        return ReplyDecision {
            text: "Sinto muito pelo transtorno! Estou te direcionando para o nosso canal de \
                   suporte técnico."
                .to_owned(),
            side_effect: Some(SideEffect::NavigateInternal(config.support_route.clone())),
        };
    }

    if matches(PRODUCT_KEYWORDS) {
        return ReplyDecision {
            text: "Temos equipamentos e licenças na nossa loja oficial. Abrindo a vitrine para \
                   você!"
                .to_owned(),
            side_effect: Some(SideEffect::NavigateExternal(config.storefront_url.clone())),
        };
    }

    if matches(CONTACT_KEYWORDS) {
        return ReplyDecision {
            text: "Claro! Vou abrir o nosso WhatsApp para você falar direto com o time.".to_owned(),
            side_effect: Some(SideEffect::NavigateExternal(whatsapp_link(
                &config.whatsapp_number,
                &config.whatsapp_greeting,
            ))),
        };
    }

    ReplyDecision::plain(
        "Não tenho certeza se entendi. Você pode perguntar sobre orçamentos, planos, suporte \
         técnico ou nossos produtos!"
            .to_owned(),
    )
}

/// Pricing summary enumerating the tiers from the site content, so the
/// chat never drifts from the pricing section.
fn plans_summary() -> String {
    let tiers = content::PLANS
        .iter()
        .map(|plan| format!("{} ({}/mês)", plan.name, format_brl(plan.price_cents)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Temos {} planos: {tiers}. Posso te ajudar a escolher o ideal?", content::PLANS.len())
}
