use yew::prelude::*;

use crate::components::reveal::{Reveal, SectionHeader};
use crate::hooks::scroll_to_section;

pub struct Plan {
    pub name: &'static str,
    pub icon: &'static str,
    pub monthly: u32,
    pub yearly: u32,
    pub description: &'static str,
    pub color: &'static str,
    pub features: &'static [&'static str],
    pub not_included: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

impl Plan {
    pub fn price(&self, yearly: bool) -> u32 {
        if yearly {
            self.yearly
        } else {
            self.monthly
        }
    }

    pub fn yearly_saving(&self) -> u32 {
        self.monthly.saturating_sub(self.yearly)
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        icon: "⚡",
        monthly: 14999,
        yearly: 11999,
        description: "Perfect for small businesses getting online for the first time.",
        color: "#43e8d8",
        features: &[
            "Up to 5 pages",
            "Mobile responsive design",
            "Contact form",
            "Basic SEO setup",
            "Google Analytics",
            "1 month support",
            "Fast hosting setup",
            "SSL certificate",
        ],
        not_included: &["E-commerce", "Custom animations", "CMS integration"],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Growth",
        icon: "✨",
        monthly: 29999,
        yearly: 23999,
        description: "For growing businesses ready to scale their online presence.",
        color: "#6c63ff",
        features: &[
            "Up to 15 pages",
            "Advanced animations",
            "Blog / News section",
            "Full SEO optimization",
            "Google Analytics + Hotjar",
            "3 months support",
            "Speed optimization",
            "Social media integration",
            "Online booking system",
            "Custom domain setup",
        ],
        not_included: &["E-commerce store"],
        cta: "Most Popular Choice",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        icon: "👑",
        monthly: 74999,
        yearly: 59999,
        description: "Full-scale digital presence for ambitious businesses.",
        color: "#ff6584",
        features: &[
            "Unlimited pages",
            "E-commerce store",
            "Custom admin panel",
            "Advanced animations",
            "Full SEO + Content strategy",
            "12 months priority support",
            "Performance optimization",
            "Multi-language support",
            "Payment integration",
            "Custom integrations",
            "Dedicated account manager",
            "Monthly reports",
        ],
        not_included: &[],
        cta: "Let's Talk",
        popular: false,
    },
];

const FAQS: &[(&str, &str)] = &[
    (
        "How long does it take to build my website?",
        "Most Starter sites are ready in 48-72 hours. Growth packages take 1-2 weeks, and Enterprise projects typically 3-4 weeks depending on complexity.",
    ),
    (
        "Do I own my website after it's built?",
        "Absolutely. You own 100% of your website, code, and content. We hand over all assets and access credentials on project completion.",
    ),
    (
        "What if I need changes after launch?",
        "All plans include a support period for revisions and bug fixes. After that, we offer affordable maintenance packages or can hand off the codebase to your team.",
    ),
    (
        "Can you redesign my existing website?",
        "Yes! We specialize in redesigns and can migrate your existing content to a modern, performant new site.",
    ),
];

/// Groups digits the Indian way: the last three together, then pairs.
/// `123456` becomes `1,23,456`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class={classes!("faq-item", open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{ props.question }</span>
                <span class="faq-icon">{"+"}</span>
            </button>
            if *open {
                <p class="faq-answer">{ props.answer }</p>
            }
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let yearly = use_state(|| false);

    let set_billing = |value: bool| {
        let yearly = yearly.clone();
        Callback::from(move |_: MouseEvent| yearly.set(value))
    };

    let plan_card = |(i, plan): (usize, &'static Plan)| {
        let price = plan.price(*yearly);
        html! {
            <Reveal delay={0.1 * i as f64 + 0.3}>
                <div
                    class={classes!("plan-card", plan.popular.then(|| "popular"))}
                    style={format!("--accent: {};", plan.color)}
                >
                    if plan.popular {
                        <div class="popular-badge">{"✦ Most Popular"}</div>
                    }
                    <div class="plan-icon">{ plan.icon }</div>
                    <h3 class="plan-name">{ plan.name }</h3>
                    <p class="plan-description">{ plan.description }</p>

                    <div class="plan-price">
                        <div class="price-row">
                            <span class="price-amount">{ format!("₹{}", format_inr(price)) }</span>
                            <span class="price-unit">{"/project"}</span>
                        </div>
                        if *yearly {
                            <span class="price-saving">
                                { format!("Save ₹{} this year", format_inr(plan.yearly_saving())) }
                            </span>
                        }
                    </div>

                    <button
                        class={classes!("plan-cta", plan.popular.then(|| "popular"))}
                        onclick={Callback::from(|_: MouseEvent| scroll_to_section("contact"))}
                    >
                        { format!("{} →", plan.cta) }
                    </button>

                    <ul class="plan-features">
                        { for plan.features.iter().map(|feature| html! {
                            <li class="included"><span class="mark">{"✓"}</span>{ *feature }</li>
                        }) }
                        { for plan.not_included.iter().map(|feature| html! {
                            <li class="excluded"><span class="mark">{"✕"}</span>{ *feature }</li>
                        }) }
                    </ul>
                </div>
            </Reveal>
        }
    };

    html! {
        <section id="pricing" class="section pricing">
            <div class="pricing-glow" />
            <div class="section-inner">
                <SectionHeader
                    badge="Transparent Pricing"
                    badge_color="#6c63ff"
                    title="Simple, Honest"
                    highlight="Pricing"
                    subtitle="No hidden fees, no surprises. Pay once, own forever."
                />

                <Reveal delay={0.3} class={classes!("billing-toggle-wrap")}>
                    <div class="billing-toggle">
                        <button class={classes!("billing-option", (!*yearly).then(|| "active"))} onclick={set_billing(false)}>
                            {"Monthly"}
                        </button>
                        <button class={classes!("billing-option", yearly.then(|| "active"))} onclick={set_billing(true)}>
                            {"Yearly"}
                            <span class="save-chip">{"Save 20%"}</span>
                        </button>
                    </div>
                </Reveal>

                <div class="plans-grid">
                    { for PLANS.iter().enumerate().map(plan_card) }
                </div>

                <div class="faq">
                    <Reveal>
                        <h3 class="faq-title">{"Frequently Asked Questions"}</h3>
                    </Reveal>
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| html! {
                        <Reveal delay={i as f64 * 0.08}>
                            <FaqItem question={*question} answer={*answer} />
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .pricing-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 800px;
                        height: 800px;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: rgba(108, 99, 255, 0.05);
                        filter: blur(120px);
                        pointer-events: none;
                    }
                    .billing-toggle-wrap { text-align: center; margin-bottom: 3rem; }
                    .billing-toggle {
                        display: inline-flex;
                        gap: 0.75rem;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .billing-option {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1.25rem;
                        border: none;
                        border-radius: 9999px;
                        background: none;
                        color: #8888aa;
                        font-weight: 600;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .billing-option.active { background: #6c63ff; color: white; }
                    .save-chip {
                        padding: 0.125rem 0.5rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        color: #34d399;
                        background: rgba(52, 211, 153, 0.2);
                    }
                    .plans-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 5rem;
                    }
                    .plan-card {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.03);
                        transition: transform 0.2s, border-color 0.3s;
                    }
                    .plan-card:hover { transform: translateY(-6px); border-color: rgba(255, 255, 255, 0.1); }
                    .plan-card.popular {
                        border-color: rgba(108, 99, 255, 0.5);
                        background: rgba(108, 99, 255, 0.08);
                        box-shadow: 0 0 40px rgba(108, 99, 255, 0.2);
                    }
                    .popular-badge {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.375rem 1.25rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #6c63ff, #43e8d8);
                        color: white;
                        font-size: 0.75rem;
                        font-weight: 700;
                        white-space: nowrap;
                    }
                    .plan-icon {
                        width: 3rem;
                        height: 3rem;
                        margin-bottom: 1.25rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--accent);
                        background: color-mix(in srgb, var(--accent) 12%, transparent);
                    }
                    .plan-name { color: white; font-weight: 900; font-size: 1.5rem; margin: 0 0 0.25rem; }
                    .plan-description { color: #8888aa; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1.5rem; }
                    .plan-price { margin-bottom: 1.5rem; }
                    .price-row { display: flex; align-items: flex-end; gap: 0.5rem; }
                    .price-amount { color: white; font-size: 3rem; font-weight: 900; }
                    .price-unit { color: #8888aa; margin-bottom: 0.5rem; }
                    .price-saving { color: #34d399; font-size: 0.875rem; }
                    .plan-cta {
                        width: 100%;
                        padding: 0.875rem 0;
                        margin-bottom: 1.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        color: white;
                        font-weight: 700;
                        cursor: pointer;
                        transition: transform 0.2s, border-color 0.3s;
                    }
                    .plan-cta:hover { transform: scale(1.03); border-color: rgba(108, 99, 255, 0.4); }
                    .plan-cta.popular {
                        border: none;
                        background: linear-gradient(90deg, #6c63ff, #43e8d8);
                    }
                    .plan-features { list-style: none; padding: 0; margin: 0; }
                    .plan-features li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                        font-size: 0.875rem;
                        color: #ccccdd;
                    }
                    .plan-features .mark {
                        width: 1.25rem;
                        height: 1.25rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.7rem;
                        color: var(--accent);
                        background: color-mix(in srgb, var(--accent) 12%, transparent);
                    }
                    .plan-features .excluded { opacity: 0.3; color: #8888aa; text-decoration: line-through; }
                    .plan-features .excluded .mark { color: white; background: rgba(255, 255, 255, 0.05); }
                    .faq { max-width: 48rem; margin: 0 auto; }
                    .faq-title { color: white; font-size: 1.875rem; font-weight: 900; text-align: center; margin-bottom: 2rem; }
                    .faq-item {
                        margin-bottom: 0.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.03);
                        overflow: hidden;
                        transition: border-color 0.3s;
                    }
                    .faq-item:hover { border-color: rgba(108, 99, 255, 0.2); }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem;
                        border: none;
                        background: none;
                        color: white;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-icon {
                        width: 2rem;
                        height: 2rem;
                        flex-shrink: 0;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #6c63ff;
                        background: rgba(108, 99, 255, 0.1);
                        transition: transform 0.2s;
                    }
                    .faq-item.open .faq-icon { transform: rotate(45deg); }
                    .faq-answer {
                        padding: 0 1.25rem 1.25rem;
                        margin: 0;
                        color: #8888aa;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        animation: fadeIn 0.3s ease-out;
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
    fn groups_the_indian_way() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(1000), "1,000");
        assert_eq!(format_inr(14999), "14,999");
        assert_eq!(format_inr(100000), "1,00,000");
        assert_eq!(format_inr(123456), "1,23,456");
        assert_eq!(format_inr(12345678), "1,23,45,678");
    }

    #[test]
    fn yearly_saving_is_the_price_difference() {
        let starter = &PLANS[0];
        assert_eq!(starter.price(false), 14999);
        assert_eq!(starter.price(true), 11999);
        assert_eq!(format_inr(starter.yearly_saving()), "3,000");
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }
}
