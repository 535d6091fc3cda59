use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::icons::whatsapp_icon;
use crate::config;
use crate::controllers::navigation::Section;
use crate::controllers::outbound;
use crate::notification::Notification;
use crate::pages::content::{
    Card, ContactChannel, ABOUT_HIGHLIGHTS, DIFFERENTIALS, OTHER_CHANNELS, PHONE_CHANNEL, SERVICES, STATS,
};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1695835805851-33a445101b3e";
const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1694712220320-5d6f4233e6aa";
const TOOLS_IMAGE: &str = "https://images.unsplash.com/photo-1685633224966-fd18820f6016";

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_navigate: Callback<Section>,
    pub on_notify: Callback<Notification>,
}

fn open_whatsapp() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| outbound::open_whatsapp())
}

fn channel(channel: &ContactChannel) -> Html {
    html! {
        <div class="channel">
            <div class={classes!("channel-icon", channel.accent)}>{channel.icon}</div>
            <div>
                <h3>{channel.title}</h3>
                <p class="muted">{channel.detail}</p>
                if let Some(note) = channel.note {
                    <p class="note">{note}</p>
                }
            </div>
        </div>
    }
}

fn service_card(index: usize, card: &Card) -> Html {
    let delay = format!("animation-delay: {:.1}s;", index as f32 * 0.1);
    html! {
        <div class="service-card glass-effect fade-up" style={delay}>
            <div class="card-icon">{card.icon}</div>
            <h3>{card.title}</h3>
            <p class="muted">{card.description}</p>
        </div>
    }
}

fn differential(index: usize, card: &Card) -> Html {
    let delay = format!("animation-delay: {:.1}s;", index as f32 * 0.1);
    html! {
        <div class="differential fade-up" style={delay}>
            <div class="card-icon small">{card.icon}</div>
            <div>
                <h3>{card.title}</h3>
                <p class="muted">{card.description}</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let go = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            // Hero
            <section id={Section::Home.id()} class="hero">
                <div class="container two-col">
                    <div class="fade-left">
                        <h1>
                            {"Com a "}<span class="gradient-text">{config::BRAND_NAME}</span>{","}<br />
                            <span class="hero-accent">{"sua academia nunca para."}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Manutenção técnica de equipamentos de academia em Balneário Camboriú e região. Preventiva, corretiva, reformas e gestão com agilidade e confiança."}
                        </p>
                        <div class="button-row">
                            <button class="btn btn-primary btn-lg pulse-glow" onclick={go(Section::Services)}>
                                {"Nossos Serviços"}<span class="arrow">{"→"}</span>
                            </button>
                            <button class="btn btn-outline btn-lg" onclick={open_whatsapp()}>
                                { whatsapp_icon(20) }
                                {"Falar com Especialista"}
                            </button>
                        </div>
                    </div>
                    <div class="fade-right floating">
                        <img class="rounded-image" src={HERO_IMAGE}
                            alt="Técnico especializado em manutenção de equipamentos de academia" />
                    </div>
                </div>
            </section>

            // Stats
            <section class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat fade-up">
                            <div class={classes!("stat-icon", stat.accent)}>{stat.icon}</div>
                            <h3 class="gradient-text">{stat.value}</h3>
                            <p class="muted">{stat.label}</p>
                        </div>
                    }) }
                </div>
            </section>

            // About
            <section id={Section::About.id()} class="section dark">
                <div class="container two-col">
                    <div class="fade-left">
                        <img class="rounded-image" src={ABOUT_IMAGE}
                            alt="Ismael, fundador da FIXFIT, técnico especializado em equipamentos de academia" />
                    </div>
                    <div class="fade-right">
                        <h2>{"Sobre a "}<span class="gradient-text">{config::BRAND_NAME}</span></h2>
                        <p class="lead">
                            {"Fundada pelo técnico "}<strong>{"Ismael"}</strong>
                            {", a FIXFIT é referência em manutenção técnica para equipamentos de academia em Balneário Camboriú e região. Somos especialistas em manutenção preventiva, corretiva, reforma e administração da manutenção, com mais de 15 anos de experiência no setor, atendendo grandes redes e academias locais."}
                        </p>
                        <div class="highlights">
                            { for ABOUT_HIGHLIGHTS.iter().map(|(title, text)| html! {
                                <div class="highlight">
                                    <span class="check">{"✔"}</span>
                                    <p><strong>{*title}</strong>{" "}{*text}</p>
                                </div>
                            }) }
                        </div>
                        <div class="button-row">
                            <button class="btn btn-primary btn-lg" onclick={go(Section::Services)}>
                                {"Ver Serviços"}<span class="arrow">{"→"}</span>
                            </button>
                            <button class="btn btn-ghost btn-lg" disabled={true}>
                                {"▶ Assistir Vídeos (Em Breve)"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            // Services
            <section id={Section::Services.id()} class="section">
                <div class="container">
                    <div class="section-heading fade-up">
                        <h2>{"Nossos "}<span class="gradient-text">{"Serviços"}</span></h2>
                        <p>{"Oferecemos soluções completas em manutenção técnica para equipamentos de academia, garantindo o funcionamento perfeito do seu negócio."}</p>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(i, card)| service_card(i, card)) }
                    </div>
                </div>
            </section>

            // Differentials
            <section id={Section::Differentials.id()} class="section dark">
                <div class="container">
                    <div class="section-heading fade-up">
                        <h2>{"Nossos "}<span class="gradient-text">{"Diferenciais"}</span></h2>
                        <p>{"O que nos torna a escolha certa para a manutenção dos seus equipamentos."}</p>
                    </div>
                    <div class="two-col">
                        <div class="fade-left">
                            <img class="rounded-image" src={TOOLS_IMAGE}
                                alt="Kit profissional de ferramentas para manutenção de equipamentos de academia" />
                        </div>
                        <div class="differentials">
                            { for DIFFERENTIALS.iter().enumerate().map(|(i, card)| differential(i, card)) }
                        </div>
                    </div>
                </div>
            </section>

            // Contact
            <section id={Section::Contact.id()} class="section">
                <div class="container">
                    <div class="section-heading fade-up">
                        <h2>{"Entre em "}<span class="gradient-text">{"Contato"}</span></h2>
                        <p>{"Pronto para garantir que sua academia funcione sempre perfeitamente? Fale conosco e solicite um orçamento personalizado."}</p>
                    </div>
                    <div class="two-col top">
                        <div class="channels fade-left">
                            { channel(&PHONE_CHANNEL) }
                            <div class="channel">
                                <div class="channel-icon accent-green">{"💬"}</div>
                                <div>
                                    <h3>{"WhatsApp"}</h3>
                                    <p class="muted">{config::CONTACT_PHONE}</p>
                                    <button class="btn-link" onclick={open_whatsapp()}>
                                        { whatsapp_icon(16) }
                                        {"Iniciar conversa →"}
                                    </button>
                                </div>
                            </div>
                            { for OTHER_CHANNELS.iter().map(channel) }
                        </div>
                        <div class="fade-right">
                            <ContactForm on_notify={props.on_notify.clone()} />
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container footer-grid">
                    <div>
                        <div class="logo">
                            <span class="logo-mark small">{"🔧"}</span>
                            <span class="gradient-text">{config::BRAND_NAME}</span>
                        </div>
                        <p class="muted">
                            {"Empresa especializada em equipamentos de academia. Manutenção preventiva, corretiva, reforma e administração da manutenção em Balneário Camboriú e região, com qualidade e confiabilidade."}
                        </p>
                    </div>
                    <div>
                        <span class="footer-title">{"Links Rápidos"}</span>
                        <div class="footer-links">
                            { for Section::FOOTER.iter().map(|section| html! {
                                <button class="footer-link" onclick={go(*section)}>{section.label()}</button>
                            }) }
                        </div>
                    </div>
                    <div>
                        <span class="footer-title">{"Contato"}</span>
                        <div class="muted footer-contact">
                            <p>{format!("📞 {}", config::CONTACT_PHONE)}</p>
                            <p>{format!("📧 {}", config::CONTACT_EMAIL)}</p>
                            <p>{format!("📍 {}", config::SERVICE_AREA)}</p>
                            <button class="btn btn-outline-green btn-sm" onclick={open_whatsapp()}>
                                { whatsapp_icon(16) }
                                {"WhatsApp"}
                            </button>
                        </div>
                    </div>
                </div>
                <div class="section-divider"></div>
                <p class="copyright">{format!("© 2025 {}. Todos os direitos reservados.", config::BRAND_NAME)}</p>
            </footer>

            <button class="whatsapp-float" onclick={open_whatsapp()} aria-label="WhatsApp">
                { whatsapp_icon(32) }
            </button>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #0f172a;
        color: #fff;
        overflow-x: hidden;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .two-col {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .two-col.top { align-items: start; }
    .gradient-text {
        background: linear-gradient(45deg, #60a5fa, #2563eb);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .glass-effect {
        background: rgba(30, 41, 59, 0.6);
        border: 1px solid rgba(148, 163, 184, 0.15);
        backdrop-filter: blur(10px);
        border-radius: 12px;
    }
    .muted { color: #94a3b8; }
    .note { color: #64748b; font-size: 0.875rem; }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding: 6rem 0 5rem;
        background: radial-gradient(circle at top right, rgba(37, 99, 235, 0.25), transparent 60%);
    }
    .hero h1 {
        font-size: 4.5rem;
        font-weight: 700;
        line-height: 1.1;
        margin-bottom: 1rem;
    }
    .hero-accent { color: #60a5fa; }
    .hero-subtitle {
        font-size: 1.5rem;
        color: #cbd5e1;
        margin-bottom: 2rem;
        line-height: 1.6;
    }
    .button-row {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border: none;
        border-radius: 8px;
        padding: 0.6rem 1.2rem;
        color: #fff;
        cursor: pointer;
        font-size: 1rem;
        transition: background 0.2s ease;
    }
    .btn-lg { padding: 0.9rem 1.8rem; font-size: 1.1rem; }
    .btn-sm { padding: 0.4rem 0.8rem; font-size: 0.875rem; margin-top: 1rem; }
    .btn-block { width: 100%; justify-content: center; }
    .btn-primary { background: #2563eb; }
    .btn-primary:hover { background: #1d4ed8; }
    .btn-outline { background: transparent; border: 1px solid #3b82f6; color: #60a5fa; }
    .btn-outline:hover { background: #3b82f6; color: #fff; }
    .btn-outline-green { background: transparent; border: 1px solid #16a34a; color: #4ade80; }
    .btn-outline-green:hover { background: #16a34a; color: #fff; }
    .btn-ghost { background: transparent; border: 1px solid #475569; }
    .btn-ghost:disabled { opacity: 0.6; cursor: not-allowed; }
    .btn-link {
        display: inline-flex;
        align-items: center;
        gap: 0.4rem;
        background: none;
        border: none;
        padding: 0;
        color: #4ade80;
        cursor: pointer;
    }
    .btn-link:hover { color: #86efac; }
    .pulse-glow { animation: pulseGlow 2s ease-in-out infinite; }
    .rounded-image {
        width: 100%;
        height: auto;
        border-radius: 16px;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .floating { animation: floating 3s ease-in-out infinite; }
    .stats { padding: 4rem 0; background: #1e293b; }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        text-align: center;
    }
    .stat h3 { font-size: 2rem; font-weight: 700; }
    .stat-icon, .channel-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
    }
    .stat-icon {
        width: 64px;
        height: 64px;
        border-radius: 50%;
        margin: 0 auto 1rem;
    }
    .accent-blue { background: #2563eb; }
    .accent-green { background: #16a34a; }
    .accent-purple { background: #9333ea; }
    .accent-orange { background: #ea580c; }
    .section { padding: 5rem 0; background: #1e293b; }
    .section.dark { background: #0f172a; }
    .section h2 { font-size: 2.5rem; font-weight: 700; margin-bottom: 1.5rem; }
    .section-heading { text-align: center; margin-bottom: 4rem; }
    .section-heading p {
        font-size: 1.25rem;
        color: #cbd5e1;
        max-width: 48rem;
        margin: 0 auto;
    }
    .lead { font-size: 1.125rem; color: #cbd5e1; line-height: 1.7; margin-bottom: 1.5rem; }
    .highlights { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2rem; }
    .highlight { display: flex; gap: 0.75rem; align-items: flex-start; color: #cbd5e1; }
    .check { color: #22c55e; }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-card { padding: 1.5rem; transition: transform 0.3s ease, box-shadow 0.3s ease; }
    .service-card:hover { transform: translateY(-4px); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4); }
    .service-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
    .card-icon {
        width: 64px;
        height: 64px;
        border-radius: 8px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        margin-bottom: 1rem;
        background: linear-gradient(135deg, #3b82f6, #1d4ed8);
        flex-shrink: 0;
    }
    .card-icon.small { width: 48px; height: 48px; font-size: 1.25rem; margin-bottom: 0; }
    .differentials { display: flex; flex-direction: column; gap: 1.5rem; }
    .differential { display: flex; gap: 1rem; align-items: flex-start; }
    .differential h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; }
    .channels { display: flex; flex-direction: column; gap: 2rem; }
    .channel { display: flex; gap: 1rem; align-items: flex-start; }
    .channel h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; }
    .channel-icon { width: 48px; height: 48px; border-radius: 8px; font-size: 1.25rem; flex-shrink: 0; }
    .contact-form { padding: 2rem; display: flex; flex-direction: column; gap: 1.5rem; }
    .form-row label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
    .form-row input, .form-row textarea {
        width: 100%;
        padding: 0.75rem 1rem;
        background: #334155;
        border: 1px solid #475569;
        border-radius: 8px;
        color: #fff;
        font-size: 1rem;
        box-sizing: border-box;
    }
    .form-row textarea { resize: none; }
    .form-row input:focus, .form-row textarea:focus {
        outline: none;
        border-color: transparent;
        box-shadow: 0 0 0 2px #3b82f6;
    }
    .footer { background: #0f172a; border-top: 1px solid #334155; padding: 3rem 0; }
    .footer-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .footer-title { display: block; font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; }
    .footer-links { display: flex; flex-direction: column; gap: 0.5rem; align-items: flex-start; }
    .footer-link { background: none; border: none; padding: 0; color: #94a3b8; cursor: pointer; font-size: 1rem; }
    .footer-link:hover { color: #60a5fa; }
    .footer-contact p { margin: 0.5rem 0; }
    .section-divider {
        height: 1px;
        margin: 2rem auto;
        max-width: 1200px;
        background: linear-gradient(90deg, transparent, #3b82f6, transparent);
    }
    .copyright { text-align: center; color: #64748b; }
    .whatsapp-float {
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        width: 64px;
        height: 64px;
        border-radius: 50%;
        border: none;
        background: #16a34a;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
        cursor: pointer;
        z-index: 40;
    }
    .whatsapp-float:hover { background: #15803d; }
    .fade-up { opacity: 0; animation: fadeUp 0.5s ease-out forwards; }
    .fade-left { opacity: 0; animation: fadeLeft 0.8s ease-out forwards; }
    .fade-right { opacity: 0; animation: fadeRight 0.8s ease-out 0.2s forwards; }
    @keyframes fadeUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeLeft {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes fadeRight {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes floating {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-12px); }
    }
    @keyframes pulseGlow {
        0%, 100% { box-shadow: 0 0 0 rgba(37, 99, 235, 0.4); }
        50% { box-shadow: 0 0 24px rgba(37, 99, 235, 0.7); }
    }
    @media (max-width: 1024px) {
        .two-col { grid-template-columns: 1fr; }
        .services-grid { grid-template-columns: repeat(2, 1fr); }
        .stats-grid { grid-template-columns: repeat(2, 1fr); }
        .hero h1 { font-size: 3rem; }
        .hero-subtitle { font-size: 1.125rem; }
    }
    @media (max-width: 768px) {
        .services-grid, .footer-grid { grid-template-columns: 1fr; }
    }
"#;
