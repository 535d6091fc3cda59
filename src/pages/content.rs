pub struct Stat {
    pub icon: &'static str,
    pub accent: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ContactChannel {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub note: Option<&'static str>,
}

pub const STATS: [Stat; 4] = [
    Stat { icon: "👥", accent: "accent-blue", value: "500+", label: "Academias Atendidas" },
    Stat { icon: "⏱", accent: "accent-green", value: "24h", label: "Tempo de Resposta" },
    Stat { icon: "🏅", accent: "accent-purple", value: "15+", label: "Anos de Experiência" },
    Stat { icon: "⚡", accent: "accent-orange", value: "100%", label: "Taxa de Sucesso" },
];

pub const ABOUT_HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Expertise Técnica:",
        "Ismael é reconhecido e respeitado no setor, com conhecimento profundo em todos os tipos de equipamentos.",
    ),
    (
        "Ferramentas Profissionais:",
        "Kits completos e especializados para qualquer tipo de manutenção ou reparo.",
    ),
    (
        "Conteúdo Técnico:",
        "Canal no YouTube com bastidores de manutenção, demonstrando nossa autoridade técnica.",
    ),
];

pub const SERVICES: [Card; 6] = [
    Card {
        icon: "⚙",
        title: "Manutenção Preventiva",
        description: "Inspeções regulares e manutenção programada para evitar problemas e prolongar a vida útil dos equipamentos.",
    },
    Card {
        icon: "🔧",
        title: "Manutenção Corretiva",
        description: "Reparo rápido e eficiente de esteiras, bicicletas, elípticos e equipamentos de musculação.",
    },
    Card {
        icon: "⚡",
        title: "Motores Elétricos",
        description: "Especialização em conserto e manutenção de motores elétricos de todos os tipos de equipamentos.",
    },
    Card {
        icon: "❄",
        title: "Ar-Condicionado",
        description: "Instalação, manutenção e reparo de sistemas de ar-condicionado e refrigeração para academias.",
    },
    Card {
        icon: "✔",
        title: "Assistência Técnica",
        description: "Suporte técnico completo com diagnóstico preciso e soluções personalizadas para cada situação.",
    },
    Card {
        icon: "★",
        title: "Consultoria Técnica",
        description: "Consultoria especializada para novos projetos, escolha de equipamentos e otimização de espaços.",
    },
];

pub const DIFFERENTIALS: [Card; 5] = [
    Card {
        icon: "🏅",
        title: "Experiência Comprovada",
        description: "Mais de 15 anos atendendo grandes redes e academias independentes com excelência.",
    },
    Card {
        icon: "⚙",
        title: "Ferramentas Profissionais",
        description: "Kits completos e especializados para qualquer tipo de equipamento ou situação.",
    },
    Card {
        icon: "⏱",
        title: "Resposta Rápida",
        description: "Atendimento em até 24 horas para emergências e agendamento flexível.",
    },
    Card {
        icon: "▶",
        title: "Conteúdo Técnico",
        description: "Canal no YouTube com bastidores e dicas técnicas, demonstrando nossa expertise.",
    },
    Card {
        icon: "🛡",
        title: "Garantia de Qualidade",
        description: "Todos os serviços com garantia e acompanhamento pós-atendimento.",
    },
];

// WhatsApp is rendered separately because it carries the chat button
pub const PHONE_CHANNEL: ContactChannel = ContactChannel {
    icon: "📞",
    accent: "accent-blue",
    title: "Telefone",
    detail: crate::config::CONTACT_PHONE,
    note: Some("Atendimento 24h para emergências"),
};

pub const OTHER_CHANNELS: [ContactChannel; 2] = [
    ContactChannel {
        icon: "✉",
        accent: "accent-purple",
        title: "E-mail",
        detail: crate::config::CONTACT_EMAIL,
        note: Some("Resposta em até 2 horas"),
    },
    ContactChannel {
        icon: "📍",
        accent: "accent-orange",
        title: "Atendimento",
        detail: crate::config::SERVICE_AREA,
        note: Some("Cobertura local garantida"),
    },
];
