//! Static site content: services, portfolio, plans, and testimonials.
//!
//! Everything the marketing sections display lives here as const tables so
//! copy edits never touch component code, and so the chat assistant can
//! quote plan pricing from the same source the pricing section renders.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A service offering card.
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// A portfolio case-study card.
pub struct Project {
    pub title: &'static str,
    pub sector: &'static str,
    pub summary: &'static str,
}

/// A subscription tier.
pub struct Plan {
    pub name: &'static str,
    /// Monthly price in centavos, formatted at render time.
    pub price_cents: u64,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
    /// The visually emphasized recommendation.
    pub highlighted: bool,
}

/// A client testimonial.
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🖥️",
        title: "Infraestrutura de TI",
        blurb: "Projeto, implantação e gestão de servidores, redes e estações de trabalho \
                para a sua operação rodar sem sustos.",
    },
    Service {
        icon: "☁️",
        title: "Cloud e Backup",
        blurb: "Migração para nuvem, backup automatizado e planos de recuperação de desastres \
                com testes periódicos.",
    },
    Service {
        icon: "🔒",
        title: "Segurança da Informação",
        blurb: "Firewall gerenciado, antivírus corporativo, políticas de acesso e treinamento \
                de equipes contra phishing.",
    },
    Service {
        icon: "🛠️",
        title: "Suporte Técnico",
        blurb: "Helpdesk remoto e presencial com SLA definido, monitoramento proativo e \
                atendimento humanizado.",
    },
    Service {
        icon: "📡",
        title: "Redes e Conectividade",
        blurb: "Cabeamento estruturado, Wi-Fi corporativo e links redundantes dimensionados \
                para o seu escritório.",
    },
    Service {
        icon: "📈",
        title: "Consultoria em Tecnologia",
        blurb: "Diagnóstico do parque atual e roadmap de evolução alinhado ao orçamento e às \
                metas do negócio.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Rede unificada para clínica com 4 unidades",
        sector: "Saúde",
        summary: "VPN entre unidades, prontuário centralizado e backup em nuvem com janela de \
                  recuperação de 15 minutos.",
    },
    Project {
        title: "Migração para nuvem de escritório contábil",
        sector: "Contabilidade",
        summary: "Servidor local aposentado, 40 estações migradas e custo mensal de \
                  infraestrutura reduzido em 35%.",
    },
    Project {
        title: "Wi-Fi corporativo para indústria alimentícia",
        sector: "Indústria",
        summary: "Cobertura total do galpão de 8.000 m² com rede segmentada para coletores de \
                  dados e visitantes.",
    },
    Project {
        title: "Blindagem digital para e-commerce em expansão",
        sector: "Varejo",
        summary: "Firewall gerenciado, WAF e monitoramento 24/7 sustentando picos de Black \
                  Friday sem indisponibilidade.",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Essencial",
        price_cents: 49_000,
        blurb: "Para pequenos escritórios que precisam de suporte confiável.",
        features: &[
            "Helpdesk remoto em horário comercial",
            "Monitoramento de até 10 estações",
            "Backup em nuvem de 200 GB",
            "Relatório mensal de saúde do parque",
        ],
        highlighted: false,
    },
    Plan {
        name: "Profissional",
        price_cents: 99_000,
        blurb: "Para empresas em crescimento que não podem parar.",
        features: &[
            "Helpdesk remoto e presencial com SLA de 4h",
            "Monitoramento de até 30 estações e 2 servidores",
            "Backup em nuvem de 1 TB com teste trimestral",
            "Firewall gerenciado",
            "Visita técnica mensal inclusa",
        ],
        highlighted: true,
    },
    Plan {
        name: "Corporativo",
        price_cents: 189_000,
        blurb: "Para operações críticas com equipe e parque maiores.",
        features: &[
            "Atendimento prioritário 24/7 com SLA de 2h",
            "Monitoramento ilimitado de estações e servidores",
            "Backup em nuvem sob medida e plano de DR",
            "Segurança gerenciada com resposta a incidentes",
            "Consultoria estratégica trimestral",
        ],
        highlighted: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Desde que fechamos com a Vetor TI, a palavra 'servidor caiu' sumiu do nosso \
                vocabulário. O time resolve antes de a gente perceber o problema.",
        author: "Mariana Lopes",
        role: "Diretora administrativa, Clínica Vida Plena",
    },
    Testimonial {
        quote: "A migração para a nuvem foi feita num fim de semana, sem perder um arquivo. \
                Segunda-feira todo mundo trabalhando normalmente.",
        author: "Ricardo Tanaka",
        role: "Sócio, Tanaka & Prado Contabilidade",
    },
    Testimonial {
        quote: "Suporte rápido, linguagem simples e relatórios que até quem não é de TI \
                entende. Recomendo de olhos fechados.",
        author: "Fernanda Castro",
        role: "Gerente de operações, Sabor do Campo Alimentos",
    },
];
