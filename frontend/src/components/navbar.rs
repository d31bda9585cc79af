use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;
use crate::hooks::scroll_to_section;
use crate::layout::{self, SectionRect};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Services", "services"),
    ("Portfolio", "portfolio"),
    ("Testimonials", "testimonials"),
    ("Pricing", "pricing"),
    ("Contact", "contact"),
];

const SCROLLED_AFTER_PX: f64 = 20.0;
const ACTIVE_THRESHOLD: f64 = 0.3;

fn current_section() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let rects: Vec<SectionRect> = NAV_LINKS
        .iter()
        .filter_map(|(_, id)| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionRect {
                id: *id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect();
    layout::active_section(&rects, viewport_height, ACTIVE_THRESHOLD).map(str::to_string)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let active = use_state(|| None::<String>);
    let pending_scroll = use_mut_ref(|| None::<Timeout>);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > SCROLLED_AFTER_PX;

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let section = current_section();
                if *active != section {
                    active.set(section);
                }
                || ()
            },
            scroll_y.to_bits(),
        );
    }

    let nav_to = {
        let menu_open = menu_open.clone();
        let pending_scroll = pending_scroll.clone();
        Callback::from(move |id: &'static str| {
            menu_open.set(false);
            // a newer click replaces (and cancels) the older scroll
            *pending_scroll.borrow_mut() = Some(Timeout::new(config::NAV_SCROLL_DELAY_MS, move || {
                scroll_to_section(id);
            }));
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link_button = |label: &'static str, id: &'static str, class: &'static str| {
        let nav_to = nav_to.clone();
        let is_active = active.as_deref() == Some(id);
        html! {
            <button
                class={classes!(class, is_active.then(|| "active"))}
                onclick={Callback::from(move |_: MouseEvent| nav_to.emit(id))}
            >
                { label }
            </button>
        }
    };

    let cta = {
        let nav_to = nav_to.clone();
        Callback::from(move |_: MouseEvent| nav_to.emit("contact"))
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-mark">{"⚡"}</span>
                    <span class="gradient-text">{ config::BRAND_NAME }</span>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(label, id)| link_button(*label, *id, "nav-link")) }
                </div>

                <button class="nav-cta" onclick={cta.clone()}>{"Get Started Free"}</button>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|(label, id)| link_button(*label, *id, "mobile-link")) }
                    <button class="mobile-cta" onclick={cta}>{"Get Started Free"}</button>
                </div>
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: rgba(10, 10, 15, 0.8);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        transition: all 0.5s;
                        animation: navDrop 0.6s ease-out both;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(10, 10, 15, 0.95);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); opacity: 0; }
                        to { transform: none; opacity: 1; }
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .nav-logo-mark {
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #6c63ff, #43e8d8);
                    }
                    .nav-links {
                        display: flex;
                        gap: 0.25rem;
                    }
                    .nav-link {
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid transparent;
                        background: none;
                        color: #8888aa;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .nav-link:hover { color: white; }
                    .nav-link.active {
                        color: white;
                        background: rgba(108, 99, 255, 0.2);
                        border-color: rgba(108, 99, 255, 0.3);
                    }
                    .nav-cta, .mobile-cta {
                        padding: 0.625rem 1.25rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: linear-gradient(90deg, #6c63ff, #43e8d8);
                        color: white;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        padding: 0.5rem 0.75rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        color: white;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        margin: 0.5rem 1rem 0;
                        padding: 1rem;
                        border-radius: 1rem;
                        background: #0e0e1a;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        animation: menuOpen 0.25s ease-in-out;
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; transform: translateY(-8px); }
                        to { opacity: 1; transform: none; }
                    }
                    .mobile-link {
                        text-align: left;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: none;
                        color: rgba(255, 255, 255, 0.8);
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .mobile-link.active, .mobile-link:hover {
                        color: white;
                        background: rgba(108, 99, 255, 0.15);
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-cta { display: none; }
                        .burger-menu { display: block; }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu { display: none; }
                    }
                "#}
            </style>
        </nav>
    }
}
