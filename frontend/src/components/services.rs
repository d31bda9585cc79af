use yew::prelude::*;

use crate::components::reveal::{Reveal, SectionHeader};

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🎨",
        title: "Custom Web Design",
        description: "Pixel-perfect, brand-aligned designs that captivate visitors and reflect your business identity.",
        color: "#6c63ff",
    },
    Service {
        icon: "⚡",
        title: "Lightning Performance",
        description: "Sub-second load times. 95+ Lighthouse scores guaranteed for every project.",
        color: "#43e8d8",
    },
    Service {
        icon: "📱",
        title: "Fully Responsive",
        description: "Flawlessly adapts to every screen: mobile, tablet and desktop. No compromises.",
        color: "#ff6584",
    },
    Service {
        icon: "🛒",
        title: "E-Commerce Ready",
        description: "Seamless online stores with secure payment integrations, inventory, and order management.",
        color: "#fbbf24",
    },
    Service {
        icon: "🔍",
        title: "SEO Optimized",
        description: "Built with structured data, meta tags, and Core Web Vitals. Rank higher from day one.",
        color: "#34d399",
    },
    Service {
        icon: "📊",
        title: "Analytics & Tracking",
        description: "Google Analytics, heat maps, and conversion funnels set up so you always know what's working.",
        color: "#a78bfa",
    },
    Service {
        icon: "🛡️",
        title: "Secure & Reliable",
        description: "SSL, automated backups, and 99.9% uptime hosting. Your business is always online.",
        color: "#fb923c",
    },
    Service {
        icon: "🎧",
        title: "Ongoing Support",
        description: "Post-launch maintenance, content updates, and 24/7 support. We're your long-term tech partner.",
        color: "#38bdf8",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section services">
            <div class="section-divider" />
            <div class="section-inner">
                <SectionHeader
                    badge="What We Offer"
                    badge_color="#6c63ff"
                    title="Everything Your Business"
                    highlight="Needs Online"
                    subtitle="From design to deployment, we handle every aspect of your web presence so you can focus on running your business."
                />

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay={i as f64 * 0.1} margin={80.0}>
                            <div class="service-card" style={format!("--card-color: {};", service.color)}>
                                <span class="service-index">{ format!("{:02}", i + 1) }</span>
                                <div class="service-icon">{ service.icon }</div>
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                                <div class="service-more">{"Learn more →"}</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .section-divider {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        width: 1px;
                        height: 8rem;
                        background: linear-gradient(transparent, rgba(108, 99, 255, 0.4), transparent);
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1.25rem;
                    }
                    .service-card {
                        position: relative;
                        height: 100%;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        overflow: hidden;
                        transition: transform 0.2s, border-color 0.3s, background 0.3s;
                    }
                    .service-card:hover {
                        transform: translateY(-6px);
                        border-color: color-mix(in srgb, var(--card-color) 30%, transparent);
                        background: color-mix(in srgb, var(--card-color) 8%, transparent);
                    }
                    .service-index {
                        position: absolute;
                        top: 1rem;
                        right: 1.25rem;
                        font-size: 3rem;
                        font-weight: 900;
                        opacity: 0.05;
                    }
                    .service-icon {
                        width: 3rem;
                        height: 3rem;
                        margin-bottom: 1.25rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        background: color-mix(in srgb, var(--card-color) 12%, transparent);
                        transition: transform 0.3s;
                    }
                    .service-card:hover .service-icon { transform: scale(1.1); }
                    .service-card h3 { color: white; font-size: 1.125rem; margin-bottom: 0.75rem; }
                    .service-card p { color: #8888aa; font-size: 0.875rem; line-height: 1.6; }
                    .service-more {
                        margin-top: 1.25rem;
                        color: var(--card-color);
                        font-size: 0.875rem;
                        font-weight: 600;
                        opacity: 0;
                        transform: translateY(0.5rem);
                        transition: all 0.3s;
                    }
                    .service-card:hover .service-more { opacity: 1; transform: none; }
                "#}
            </style>
        </section>
    }
}
