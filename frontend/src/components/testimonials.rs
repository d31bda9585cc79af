use yew::prelude::*;

use crate::components::reveal::{Reveal, SectionHeader};

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub business: &'static str,
    pub emoji: &'static str,
    pub rating: usize,
    pub text: &'static str,
    pub color: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        role: "Owner",
        business: "Glow Beauty Studio",
        emoji: "💅",
        rating: 5,
        text: "web.kraft transformed our salon's online presence completely. Bookings tripled within the first month! The website is stunning, loads instantly, and our clients constantly compliment how easy it is to book appointments. Worth every penny.",
        color: "#a78bfa",
    },
    Testimonial {
        name: "Marco Rossi",
        role: "Head Chef & Co-owner",
        business: "La Maison Rouge",
        emoji: "🍽️",
        rating: 5,
        text: "I was skeptical about investing in a website, but the ROI has been incredible. We went from zero online orders to 40% of our revenue coming through the site. The team understood our brand perfectly and delivered beyond expectations.",
        color: "#ff6584",
    },
    Testimonial {
        name: "Jennifer Walsh",
        role: "Managing Partner",
        business: "Summit Law Group",
        emoji: "⚖️",
        rating: 5,
        text: "As a law firm, credibility is everything. web.kraft delivered a site that exudes professionalism and trust. Consultation requests doubled in 6 weeks. Our competitors are still using websites from 2015; we feel miles ahead.",
        color: "#43e8d8",
    },
    Testimonial {
        name: "Aisha Patel",
        role: "Founder",
        business: "Urban Threads Boutique",
        emoji: "👗",
        rating: 5,
        text: "From the initial call to launch, the process was seamless. They nailed our aesthetic without us having to explain it ten times. Sales from the website now account for 60% of our total revenue. Absolutely game-changing.",
        color: "#fbbf24",
    },
    Testimonial {
        name: "Dr. Rohan Mehta",
        role: "Medical Director",
        business: "WellCare Clinic",
        emoji: "🏥",
        rating: 5,
        text: "Patient acquisition through our website has increased by 240%. The appointment booking system is intuitive and we've had zero technical issues since launch. Professional, responsive, and genuinely invested in our success.",
        color: "#34d399",
    },
];

/// Index into a fixed-length ring of slides. Stepping wraps at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            active: (self.active + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            active: (self.active + self.len - 1) % self.len,
            ..self
        }
    }

    /// Out-of-range indices leave the carousel where it was.
    pub fn select(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self {
            active: index,
            ..self
        }
    }
}

fn stars(count: usize, class: &'static str) -> Html {
    html! {
        <div class={classes!("stars", class)}>
            { for (0..count).map(|_| html! { <span class="star">{"★"}</span> }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));

    let step = |f: fn(Carousel) -> Carousel| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(f(*carousel)))
    };
    let on_prev = step(Carousel::prev);
    let on_next = step(Carousel::next);
    let select = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.select(index)))
    };

    let active = carousel.active();
    let featured = TESTIMONIALS.get(active).map(|current| html! {
        <div
            key={active}
            class="featured-testimonial"
            style={format!("--accent: {};", current.color)}
        >
            <div class="featured-glow" />
            <span class="featured-quote-mark">{"❝"}</span>
            <div class="featured-inner">
                { stars(current.rating, "large") }
                <p class="featured-text">{ format!("\"{}\"", current.text) }</p>
                <div class="featured-author">
                    <div class="author-avatar">{ current.emoji }</div>
                    <div>
                        <div class="author-name">{ current.name }</div>
                        <div class="author-role">{ format!("{} · {}", current.role, current.business) }</div>
                    </div>
                    <div class="verified-pill">{"Verified Client"}</div>
                </div>
            </div>
        </div>
    });

    html! {
        <section id="testimonials" class="section testimonials">
            <div class="section-inner">
                <SectionHeader
                    badge="Client Stories"
                    badge_color="#fbbf24"
                    title="Don't Take Our"
                    highlight="Word For It"
                    subtitle="Real results from real business owners who trusted us with their digital presence."
                />

                <div class="featured-wrap">
                    { for featured }

                    <div class="carousel-controls">
                        <button class="carousel-arrow" onclick={on_prev} aria-label="Previous testimonial">{"‹"}</button>
                        <div class="carousel-dots">
                            { for TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                                let style = if i == active {
                                    format!("width: 28px; background: {};", t.color)
                                } else {
                                    "width: 8px; background: rgba(255, 255, 255, 0.15);".to_string()
                                };
                                html! { <button class="carousel-dot" {style} onclick={select(i)} /> }
                            }) }
                        </div>
                        <button class="carousel-arrow" onclick={on_next} aria-label="Next testimonial">{"›"}</button>
                    </div>
                </div>

                <div class="mini-cards">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal delay={i as f64 * 0.08}>
                            <button
                                class={classes!("mini-card", (i == active).then(|| "active"))}
                                style={format!("--accent: {};", t.color)}
                                onclick={select(i)}
                            >
                                <div class="mini-emoji">{ t.emoji }</div>
                                <div class="mini-name">{ t.name }</div>
                                <div class="mini-business">{ t.business }</div>
                                { stars(t.rating, "small") }
                            </button>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .featured-wrap { max-width: 56rem; margin: 0 auto 3rem; }
                    .featured-testimonial {
                        position: relative;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid color-mix(in srgb, var(--accent) 12%, transparent);
                        animation: slideIn 0.4s ease-in-out;
                    }
                    @keyframes slideIn {
                        from { opacity: 0; transform: translateY(30px) scale(0.97); }
                        to { opacity: 1; transform: none; }
                    }
                    .featured-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 1.5rem;
                        opacity: 0.05;
                        background: radial-gradient(ellipse at center, var(--accent), transparent 70%);
                    }
                    .featured-quote-mark {
                        position: absolute;
                        top: 2rem;
                        right: 2rem;
                        font-size: 4rem;
                        line-height: 1;
                        color: var(--accent);
                        opacity: 0.1;
                    }
                    .featured-inner { position: relative; z-index: 1; }
                    .stars { display: flex; gap: 0.25rem; color: #fbbf24; }
                    .stars.small { font-size: 0.75rem; margin-top: 0.5rem; gap: 0.125rem; }
                    .featured-text {
                        color: white;
                        font-size: 1.2rem;
                        font-weight: 300;
                        line-height: 1.7;
                        margin: 1.5rem 0 2rem;
                    }
                    .featured-author { display: flex; align-items: center; gap: 1rem; }
                    .author-avatar {
                        width: 3.5rem;
                        height: 3.5rem;
                        flex-shrink: 0;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        background: color-mix(in srgb, var(--accent) 12%, transparent);
                    }
                    .author-name { color: white; font-weight: 700; font-size: 1.125rem; }
                    .author-role { color: #8888aa; font-size: 0.875rem; }
                    .verified-pill {
                        margin-left: auto;
                        padding: 0.5rem 1rem;
                        border-radius: 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: var(--accent);
                        background: color-mix(in srgb, var(--accent) 8%, transparent);
                    }
                    .carousel-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .carousel-arrow {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        color: #8888aa;
                        font-size: 1.5rem;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .carousel-arrow:hover { color: white; border-color: rgba(108, 99, 255, 0.4); transform: scale(1.1); }
                    .carousel-dots { display: flex; gap: 0.5rem; }
                    .carousel-dot {
                        height: 8px;
                        padding: 0;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .mini-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                        gap: 1rem;
                    }
                    .mini-card {
                        width: 100%;
                        padding: 1rem;
                        text-align: left;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.03);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .mini-card:hover { transform: translateY(-4px); border-color: rgba(255, 255, 255, 0.1); }
                    .mini-card.active {
                        border-color: var(--accent);
                        background: color-mix(in srgb, var(--accent) 6%, transparent);
                    }
                    .mini-emoji { font-size: 1.5rem; margin-bottom: 0.5rem; }
                    .mini-name, .mini-business {
                        white-space: nowrap;
                        overflow: hidden;
                        text-overflow: ellipsis;
                    }
                    .mini-name { color: white; font-weight: 600; font-size: 0.875rem; }
                    .mini-business { color: #8888aa; font-size: 0.75rem; }
                    @media (max-width: 640px) {
                        .featured-testimonial { padding: 2rem; }
                        .verified-pill { display: none; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let carousel = Carousel::new(5).select(4);
        assert_eq!(carousel.next().active(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let carousel = Carousel::new(5);
        assert_eq!(carousel.prev().active(), 4);
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut carousel = Carousel::new(TESTIMONIALS.len()).select(2);
        for _ in 0..TESTIMONIALS.len() {
            carousel = carousel.next();
        }
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let carousel = Carousel::new(5).select(3);
        assert_eq!(carousel.select(5).active(), 3);
        assert_eq!(carousel.select(usize::MAX).active(), 3);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next().active(), 0);
        assert_eq!(carousel.prev().active(), 0);
        assert_eq!(carousel.select(0).active(), 0);
    }
}
