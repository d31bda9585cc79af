use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::hooks::scroll_to_section;

const LINK_COLUMNS: &[(&str, &[&str])] = &[
    (
        "Services",
        &["Web Design", "E-Commerce", "SEO Optimization", "Performance Audit", "Redesign", "Maintenance"],
    ),
    ("Company", &["About Us", "Portfolio", "Blog", "Careers", "Press Kit"]),
    ("Legal", &["Privacy Policy", "Terms of Service", "Cookie Policy", "Refund Policy"]),
];

const SOCIALS: &[(&str, &str)] = &[
    ("Twitter", "𝕏"),
    ("Instagram", "◎"),
    ("LinkedIn", "in"),
    ("GitHub", "⌥"),
];

fn copyright_line(year: i32) -> String {
    format!("© {} {}. Made with", year, config::BRAND_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_section("hero"));

    html! {
        <footer class="site-footer">
            <div class="footer-glow" />
            <div class="footer-inner">
                <div class="footer-top">
                    <div class="footer-brand">
                        <Reveal class={classes!("footer-logo")}>
                            <span class="nav-logo-mark">{"⚡"}</span>
                            <span class="gradient-text">{ config::BRAND_NAME }</span>
                        </Reveal>
                        <Reveal delay={0.1}>
                            <p class="footer-blurb">
                                {"We build stunning, high-performance websites for businesses that want to dominate their market online. Fast. Beautiful. Affordable."}
                            </p>
                        </Reveal>
                        <Reveal delay={0.2} class={classes!("footer-socials")}>
                            { for SOCIALS.iter().map(|(label, glyph)| html! {
                                <a href="#" class="social-link" aria-label={*label}>{ *glyph }</a>
                            }) }
                        </Reveal>
                        <Reveal delay={0.3} class={classes!("newsletter")}>
                            <p class="newsletter-title">{"Get web tips in your inbox"}</p>
                            <div class="newsletter-row">
                                <input type="email" placeholder="you@email.com" />
                                <button class="newsletter-button" aria-label="Subscribe">{"↗"}</button>
                            </div>
                        </Reveal>
                    </div>

                    { for LINK_COLUMNS.iter().enumerate().map(|(i, (title, links))| html! {
                        <Reveal delay={0.1 * i as f64 + 0.2}>
                            <h4 class="footer-heading">{ *title }</h4>
                            <ul class="footer-links">
                                { for links.iter().map(|link| html! {
                                    <li><a href="#">{ *link }</a></li>
                                }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>

                <div class="footer-divider" />

                <div class="footer-bottom">
                    <p class="copyright">
                        { copyright_line(year) }
                        <span class="heart">{" ♥ "}</span>
                        {"for ambitious businesses."}
                    </p>
                    <div class="footer-actions">
                        <button class="back-to-top" onclick={back_to_top}>{"Back to top ↑"}</button>
                        <div class="status-pill">
                            <span class="status-dot" />
                            <span>{"All systems operational"}</span>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        overflow: hidden;
                    }
                    .footer-glow {
                        position: absolute;
                        bottom: 0;
                        left: 50%;
                        width: 600px;
                        height: 300px;
                        transform: translateX(-50%);
                        border-radius: 50%;
                        background: rgba(108, 99, 255, 0.05);
                        filter: blur(100px);
                        pointer-events: none;
                    }
                    .footer-inner {
                        position: relative;
                        z-index: 1;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .footer-top {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 3rem;
                        padding: 4rem 0;
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.25rem;
                        font-size: 1.5rem;
                        font-weight: 900;
                    }
                    .footer-blurb { color: #8888aa; font-size: 0.875rem; line-height: 1.6; max-width: 20rem; margin-bottom: 1.5rem; }
                    .footer-socials { display: flex; gap: 0.75rem; }
                    .social-link {
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.03);
                        color: #8888aa;
                        font-size: 0.8rem;
                        font-weight: 700;
                        text-decoration: none;
                        transition: all 0.2s;
                    }
                    .social-link:hover { color: #6c63ff; border-color: rgba(108, 99, 255, 0.3); transform: translateY(-2px); }
                    .newsletter { margin-top: 1.5rem; }
                    .newsletter-title { color: white; font-size: 0.875rem; font-weight: 600; margin-bottom: 0.5rem; }
                    .newsletter-row { display: flex; gap: 0.5rem; }
                    .newsletter-row input {
                        flex: 1;
                        min-width: 0;
                        padding: 0.625rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: white;
                        font-size: 0.875rem;
                    }
                    .newsletter-row input:focus { outline: none; border-color: rgba(108, 99, 255, 0.5); }
                    .newsletter-button {
                        padding: 0 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #6c63ff;
                        color: white;
                        cursor: pointer;
                    }
                    .newsletter-button:hover { background: #7c73ff; }
                    .footer-heading { color: white; font-size: 0.875rem; font-weight: 700; margin-bottom: 1.25rem; }
                    .footer-links { list-style: none; padding: 0; margin: 0; }
                    .footer-links li { margin-bottom: 0.75rem; }
                    .footer-links a {
                        display: inline-block;
                        color: #8888aa;
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: all 0.2s;
                    }
                    .footer-links a:hover { color: white; transform: translateX(4px); }
                    .footer-divider { height: 1px; background: linear-gradient(90deg, transparent, rgba(108, 99, 255, 0.3), transparent); }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 1.5rem 0;
                    }
                    .copyright { color: #8888aa; font-size: 0.75rem; margin: 0; }
                    .heart { color: #ff6584; }
                    .footer-actions { display: flex; align-items: center; gap: 1rem; }
                    .back-to-top {
                        border: none;
                        background: none;
                        color: #8888aa;
                        font-size: 0.75rem;
                        cursor: pointer;
                    }
                    .back-to-top:hover { color: white; }
                    .status-pill { display: flex; align-items: center; gap: 0.375rem; color: #34d399; font-size: 0.75rem; font-weight: 500; }
                    .status-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #34d399;
                        animation: pulseGlow 2s ease-in-out infinite;
                    }
                    @media (max-width: 1024px) {
                        .footer-top { grid-template-columns: 1fr 1fr; }
                        .footer-brand { grid-column: 1 / -1; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_brand() {
        assert_eq!(copyright_line(2026), "© 2026 web.kraft. Made with");
    }
}
