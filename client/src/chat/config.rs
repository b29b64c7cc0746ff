//! Externalized configuration for the chat assistant: reply delay, link
//! targets, and the quick-reply vocabulary. Defaults match the production
//! site; a host can override any field by deserializing its own values.

use serde::Deserialize;

/// Chat assistant configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated typing delay before a canned reply appears.
    pub reply_delay_ms: u32,
    /// Seeded welcome turn.
    pub welcome: String,
    /// Pre-canned user inputs offered as buttons; selecting one is
    /// equivalent to typing that exact text and submitting it.
    pub quick_replies: Vec<String>,
    /// External marketplace storefront.
    pub storefront_url: String,
    /// WhatsApp number in international format, digits only.
    pub whatsapp_number: String,
    /// Preset first message for the WhatsApp deep link.
    pub whatsapp_greeting: String,
    /// Internal route for quote requests.
    pub contact_route: String,
    /// Internal route for support requests.
    pub support_route: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1200,
            welcome: "Olá! 👋 Sou o assistente virtual da Vetor TI. Posso ajudar com orçamentos, \
                      planos, suporte ou nossos produtos."
                .to_owned(),
            quick_replies: vec![
                "Quero um orçamento".to_owned(),
                "Sobre os planos".to_owned(),
                "Suporte técnico".to_owned(),
                "Ver produtos".to_owned(),
                "Falar conosco".to_owned(),
            ],
            storefront_url: "https://loja.vetorti.com.br".to_owned(),
            whatsapp_number: "5511987654321".to_owned(),
            whatsapp_greeting: "Olá! Vim pelo site da Vetor TI.".to_owned(),
            contact_route: "/contato".to_owned(),
            support_route: "/contato?assunto=suporte".to_owned(),
        }
    }
}
