use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::hooks::{scroll_to_section, use_particle_field};
use crate::layout;

const TECH_STACK: &[&str] = &[
    "React", "TypeScript", "Tailwind", "Node.js", "Vite", "Next.js", "Figma", "Framer",
];

const STATS: &[(&str, &str)] = &[
    ("50+", "Websites Launched"),
    ("100%", "Client Satisfaction"),
    ("48hr", "Avg. Turnaround"),
    ("3x", "Avg. Revenue Boost"),
];

struct FloatingCard {
    icon: &'static str,
    title: &'static str,
    sub: &'static str,
    delay_s: f64,
    position: &'static str,
    reverse: bool,
}

const FLOATING_CARDS: &[FloatingCard] = &[
    FloatingCard {
        icon: "📈",
        title: "Revenue +180%",
        sub: "After website launch",
        delay_s: 0.0,
        position: "top: 18%; right: 8%;",
        reverse: false,
    },
    FloatingCard {
        icon: "⭐",
        title: "5.0 Rating",
        sub: "50+ Happy Clients",
        delay_s: 0.4,
        position: "bottom: 22%; left: 6%;",
        reverse: true,
    },
    FloatingCard {
        icon: "✨",
        title: "48hr Delivery",
        sub: "Fast turnaround",
        delay_s: 0.8,
        position: "top: 55%; right: 5%;",
        reverse: false,
    },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    use_particle_field(canvas_ref.clone());

    let section_height = section_ref
        .cast::<Element>()
        .map(|section| section.client_height() as f64)
        .unwrap_or(0.0);
    let parallax = layout::hero_parallax(layout::scroll_progress(scroll_y, section_height));

    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let to_portfolio = Callback::from(|_: MouseEvent| scroll_to_section("portfolio"));

    html! {
        <section id="hero" class="hero" ref={section_ref}>
            <canvas ref={canvas_ref} class="hero-particles" />

            <div class="glow-orb orb-a" />
            <div class="glow-orb orb-b" />

            <div
                class="hero-content"
                style={format!("transform: translateY({:.1}px); opacity: {:.3};", parallax.offset_y, parallax.opacity)}
            >
                <div class="hero-badge fade-up">
                    <span>{"✨"}</span>
                    <span>{"Professional Web Design Studio"}</span>
                    <span class="badge-dot" />
                </div>

                <h1 class="hero-title fade-up" style="animation-delay: 0.1s;">
                    <span class="title-line">{"Your Business"}</span>
                    <span class="title-line shimmer-text">{"Deserves a"}</span>
                    <span class="title-line gradient-text">{"Stunning Website"}</span>
                </h1>

                <p class="hero-subtitle fade-up" style="animation-delay: 0.3s;">
                    {"We craft blazing-fast, beautifully designed websites that turn visitors into customers. From restaurants to law firms, your digital storefront, built to convert."}
                </p>

                <div class="hero-cta-group fade-up" style="animation-delay: 0.45s;">
                    <button class="hero-cta primary" onclick={to_contact}>
                        {"Start Your Project →"}
                    </button>
                    <button class="hero-cta secondary" onclick={to_portfolio}>
                        <span class="play-icon">{"▶"}</span>
                        {"View Our Work"}
                    </button>
                </div>

                <div class="hero-stats fade-up" style="animation-delay: 0.6s;">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="hero-stat">
                            <div class="stat-value gradient-text">{ *value }</div>
                            <div class="stat-label">{ *label }</div>
                        </div>
                    }) }
                </div>

                <div class="ticker fade-in" style="animation-delay: 0.8s;">
                    <div class="ticker-track">
                        { for TECH_STACK.iter().chain(TECH_STACK.iter()).map(|tech| html! {
                            <span class="ticker-chip">{ *tech }</span>
                        }) }
                    </div>
                </div>
            </div>

            { for FLOATING_CARDS.iter().map(|card| html! {
                <div
                    class={classes!("floating-card", card.reverse.then(|| "reverse"))}
                    style={format!("{} animation-delay: {:.1}s;", card.position, 1.0 + card.delay_s)}
                >
                    <div class="floating-icon">{ card.icon }</div>
                    <div>
                        <p class="floating-title">{ card.title }</p>
                        <p class="floating-sub">{ card.sub }</p>
                    </div>
                </div>
            }) }

            <div class="scroll-indicator">
                <span>{"Scroll"}</span>
                <div class="scroll-mouse"><div class="scroll-wheel" /></div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-particles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .glow-orb {
                        position: absolute;
                        border-radius: 50%;
                        pointer-events: none;
                        animation: pulseGlow 3s ease-in-out infinite;
                    }
                    .orb-a {
                        top: 25%;
                        left: 25%;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(108, 99, 255, 0.1);
                        filter: blur(120px);
                    }
                    .orb-b {
                        bottom: 25%;
                        right: 25%;
                        width: 20rem;
                        height: 20rem;
                        background: rgba(67, 232, 216, 0.08);
                        filter: blur(100px);
                        animation-delay: 1.5s;
                    }
                    @keyframes pulseGlow {
                        0%, 100% { opacity: 0.6; }
                        50% { opacity: 1; }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        width: 100%;
                        padding: 7rem 1.5rem 4rem;
                        text-align: center;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 2rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(108, 99, 255, 0.3);
                        color: #6c63ff;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .badge-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #43e8d8;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 900;
                        line-height: 1.05;
                        letter-spacing: -0.025em;
                        margin-bottom: 1.5rem;
                    }
                    .title-line { display: block; }
                    .hero-subtitle {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        color: #8888aa;
                        font-size: 1.2rem;
                        line-height: 1.7;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 4rem;
                    }
                    .hero-cta {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: white;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .hero-cta:hover { transform: scale(1.05); }
                    .hero-cta.primary {
                        border: none;
                        background: linear-gradient(90deg, #6c63ff, #43e8d8);
                        box-shadow: 0 0 30px rgba(108, 99, 255, 0.35);
                    }
                    .hero-cta.secondary {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(108, 99, 255, 0.3);
                    }
                    .play-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(108, 99, 255, 0.2);
                        color: #6c63ff;
                    }
                    .hero-stats {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 3rem;
                        margin-bottom: 4rem;
                    }
                    .stat-value { font-size: 1.875rem; font-weight: 900; }
                    .stat-label { color: #8888aa; font-size: 0.875rem; margin-top: 0.25rem; }
                    .ticker {
                        position: relative;
                        overflow: hidden;
                        mask-image: linear-gradient(90deg, transparent, black 6rem, black calc(100% - 6rem), transparent);
                    }
                    .ticker-track {
                        display: flex;
                        gap: 1.5rem;
                        width: max-content;
                        animation: ticker 30s linear infinite;
                    }
                    @keyframes ticker {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    .ticker-chip {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(108, 99, 255, 0.1);
                        color: #8888aa;
                        font-size: 0.875rem;
                        white-space: nowrap;
                    }
                    .floating-card {
                        position: absolute;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(108, 99, 255, 0.2);
                        backdrop-filter: blur(12px);
                        animation: popIn 0.6s ease-out both, float 6s ease-in-out infinite;
                    }
                    .floating-card.reverse {
                        animation: popIn 0.6s ease-out both, floatReverse 6s ease-in-out infinite;
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes float {
                        0%, 100% { translate: 0 0; }
                        50% { translate: 0 -12px; }
                    }
                    @keyframes floatReverse {
                        0%, 100% { translate: 0 0; }
                        50% { translate: 0 12px; }
                    }
                    .floating-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(108, 99, 255, 0.1);
                    }
                    .floating-title { color: white; font-weight: 700; font-size: 0.875rem; margin: 0; }
                    .floating-sub { color: #8888aa; font-size: 0.75rem; margin: 0; }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: #8888aa;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        animation: fadeIn 0.6s ease-out 1.5s both;
                    }
                    .scroll-mouse {
                        width: 1.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 2px solid rgba(108, 99, 255, 0.4);
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                        animation: bob 1.5s ease-in-out infinite;
                    }
                    .scroll-wheel {
                        width: 0.375rem;
                        height: 0.375rem;
                        border-radius: 50%;
                        background: #6c63ff;
                    }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(8px); }
                    }
                    @media (max-width: 1024px) {
                        .floating-card { display: none; }
                    }
                "#}
            </style>
        </section>
    }
}
