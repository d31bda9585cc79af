use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

const BUSINESS_FALLBACK: &str = "Not provided";
const BUDGET_FALLBACK: &str = "Not specified";

pub const BUDGETS: &[(&str, &str)] = &[
    ("Under ₹15,000 (Starter)", "Under ₹15,000 – Starter"),
    ("₹15,000 – ₹30,000 (Growth)", "₹15,000 – ₹30,000 – Growth"),
    ("₹30,000 – ₹75,000 (Enterprise)", "₹30,000 – ₹75,000 – Enterprise"),
    ("₹75,000+ (Custom)", "₹75,000+ – Custom / Enterprise+"),
    ("Not sure yet – Let's discuss", "Not sure yet – Let's discuss"),
];

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Discovery Call", "We learn about your business, goals, and vision in a free 30-min call."),
    ("02", "Design & Plan", "We create wireframes and a project plan tailored to your needs."),
    ("03", "Build & Review", "We build your site and share live previews for your feedback."),
    ("04", "Launch 🚀", "We deploy, optimize, and hand over your fully-owned website."),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    WhatsApp,
    Email,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Email => "Email",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub business: String,
    pub budget: String,
    pub message: String,
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<(), QuoteError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(QuoteError::MissingField(*field)),
            None => Ok(()),
        }
    }

    fn business(&self) -> &str {
        or_fallback(&self.business, BUSINESS_FALLBACK)
    }

    fn budget(&self) -> &str {
        or_fallback(&self.budget, BUDGET_FALLBACK)
    }

    /// `wa.me` deep link with the quote pre-filled as the chat text.
    pub fn whatsapp_link(&self, phone: &str) -> String {
        let text = format!(
            "Hi! I'd like a free quote for my website.\n\n\
             *Name:* {}\n\
             *Email:* {}\n\
             *Business:* {}\n\
             *Budget:* {}\n\
             *Project Details:* {}",
            self.name.trim(),
            self.email.trim(),
            self.business(),
            self.budget(),
            self.message.trim(),
        );
        format!("https://wa.me/{}?text={}", phone, urlencoding::encode(&text))
    }

    pub fn mailto_link(&self, address: &str) -> String {
        let subject = format!(
            "Website Quote Request – {}",
            or_fallback(&self.business, self.name.trim())
        );
        let body = format!(
            "Hi {},\n\n\
             I'd like to get a free quote for my website.\n\n\
             Name: {}\n\
             Email: {}\n\
             Business: {}\n\
             Budget: {}\n\n\
             Project Details:\n{}",
            config::BRAND_NAME,
            self.name.trim(),
            self.email.trim(),
            self.business(),
            self.budget(),
            self.message.trim(),
        );
        format!(
            "mailto:{}?subject={}&body={}",
            address,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }

    pub fn link(&self, channel: Channel) -> String {
        match channel {
            Channel::WhatsApp => self.whatsapp_link(config::WHATSAPP_NUMBER),
            Channel::Email => self.mailto_link(config::CONTACT_EMAIL),
        }
    }
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("could not open {}: {:?}", url, e);
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(QuoteRequest::default);
    let channel = use_state(|| Channel::WhatsApp);
    let loading = use_state(|| false);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    let update = |apply: fn(&mut QuoteRequest, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_business = {
        let set = update(|f, v| f.business = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_budget = {
        let set = update(|f, v| f.budget = v);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            set(area.value());
        })
    };

    let choose = |value: Channel| {
        let channel = channel.clone();
        Callback::from(move |_: MouseEvent| channel.set(value))
    };

    let onsubmit = {
        let form = form.clone();
        let channel = channel.clone();
        let loading = loading.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            if let Err(err) = form.validate() {
                warn!("quote form rejected: {}", err);
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            loading.set(true);

            let link = form.link(*channel);
            let loading = loading.clone();
            let submitted = submitted.clone();
            let via = channel.label();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                loading.set(false);
                info!("opening quote request via {}", via);
                open_in_new_tab(&link);
                submitted.set(true);
            });
        })
    };

    let reset = {
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| submitted.set(false))
    };

    let channel_button = |value: Channel, icon: &'static str| {
        let key = match value {
            Channel::WhatsApp => "whatsapp",
            Channel::Email => "email",
        };
        html! {
            <button
                type="button"
                class={classes!("channel-option", key, (*channel == value).then(|| "active"))}
                onclick={choose(value)}
            >
                <span>{ icon }</span>
                { value.label() }
            </button>
        }
    };

    let form_panel = if *submitted {
        html! {
            <div class="sent-state">
                <div class="sent-emoji">{"🎉"}</div>
                <h3>{"Message Sent!"}</h3>
                <p>
                    {"Thanks for reaching out! We'll get back to you within 24 hours to schedule your free discovery call."}
                </p>
                <button class="sent-reset" onclick={reset}>{"Send another message"}</button>
            </div>
        }
    } else {
        html! {
            <>
                <h3 class="form-title">{"Get a Free Quote"}</h3>
                <p class="form-subtitle">{"Fill out the form below and we'll get back to you within 24 hours."}</p>
                <form class="quote-form" {onsubmit}>
                    <div class="form-row">
                        <label>
                            <span>{"Your Name *"}</span>
                            <input type="text" required=true value={form.name.clone()} oninput={on_name} placeholder="John Smith" />
                        </label>
                        <label>
                            <span>{"Email *"}</span>
                            <input type="email" required=true value={form.email.clone()} oninput={on_email} placeholder="john@company.com" />
                        </label>
                    </div>
                    <label>
                        <span>{"Business Name"}</span>
                        <input type="text" value={form.business.clone()} oninput={on_business} placeholder="Your Business Name" />
                    </label>
                    <label>
                        <span>{"Budget Range"}</span>
                        <select onchange={on_budget}>
                            <option value="" selected={form.budget.is_empty()}>{"Select a budget"}</option>
                            { for BUDGETS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={form.budget == *value}>{ *label }</option>
                            }) }
                        </select>
                    </label>
                    <label>
                        <span>{"Tell us about your project *"}</span>
                        <textarea
                            required=true
                            rows="4"
                            value={form.message.clone()}
                            oninput={on_message}
                            placeholder="What kind of website do you need? Any specific features or pages?"
                        />
                    </label>

                    <div class="channel-picker">
                        <span class="channel-label">{"Send inquiry via"}</span>
                        <div class="channel-options">
                            { channel_button(Channel::WhatsApp, "💬") }
                            { channel_button(Channel::Email, "✉️") }
                        </div>
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="form-error">{ message }</p>
                    }

                    <button type="submit" class="submit-button" disabled={*loading}>
                        if *loading {
                            <span class="spinner" />
                            { format!("Opening {}...", channel.label()) }
                        } else {
                            { format!("Send via {} →", channel.label()) }
                        }
                    </button>
                    <p class="form-note">{"🔒 Your information is secure and never shared with third parties."}</p>
                </form>
            </>
        }
    };

    html! {
        <section id="contact" class="section contact">
            <div class="section-inner">
                <Reveal class={classes!("cta-banner")}>
                    <div class="cta-rocket">{"🚀"}</div>
                    <h2 class="section-title">
                        {"Ready to Grow "}
                        <span class="gradient-text">{"Your Business?"}</span>
                    </h2>
                    <p class="section-subtitle">
                        { format!("Join 50+ businesses who trusted {} to build their online presence. Your first consultation is completely free.", config::BRAND_NAME) }
                    </p>
                    <div class="cta-links">
                        <a class="cta-link" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                            <span class="cta-link-icon">{"✉️"}</span>
                            { config::CONTACT_EMAIL }
                        </a>
                        <a
                            class="cta-link"
                            href={format!("https://wa.me/{}", config::WHATSAPP_NUMBER)}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class="cta-link-icon">{"📞"}</span>
                            { config::WHATSAPP_DISPLAY }
                        </a>
                    </div>
                </Reveal>

                <div class="contact-grid">
                    <div>
                        <Reveal class={classes!("process-intro")}>
                            <div class="section-badge" style="color: #6c63ff; border-color: #6c63ff4d;">{"How It Works"}</div>
                            <h3 class="process-title">
                                {"From Idea to Launch in "}
                                <span class="gradient-text">{"4 Simple Steps"}</span>
                            </h3>
                            <p class="process-copy">{"Our streamlined process means you get a stunning website without the stress."}</p>
                        </Reveal>

                        { for PROCESS_STEPS.iter().enumerate().map(|(i, (step, title, desc))| html! {
                            <Reveal delay={i as f64 * 0.1}>
                                <div class="process-step">
                                    <div class="process-rail">
                                        <div class="process-number">{ *step }</div>
                                        if i + 1 < PROCESS_STEPS.len() {
                                            <div class="process-line" />
                                        }
                                    </div>
                                    <div class="process-body">
                                        <h4>{ *title }</h4>
                                        <p>{ *desc }</p>
                                    </div>
                                </div>
                            </Reveal>
                        }) }

                        <Reveal class={classes!("worldwide")}>
                            <span class="worldwide-pin">{"📍"}</span>
                            <div>
                                <p class="worldwide-title">{"We work with clients worldwide"}</p>
                                <p class="worldwide-sub">{"Remote-first · All time zones welcome"}</p>
                            </div>
                        </Reveal>
                    </div>

                    <Reveal class={classes!("form-panel")}>
                        { form_panel }
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                    .cta-banner {
                        position: relative;
                        margin-bottom: 5rem;
                        padding: 4rem 3rem;
                        border-radius: 1.5rem;
                        text-align: center;
                        overflow: hidden;
                        border: 1px solid rgba(108, 99, 255, 0.3);
                        background: linear-gradient(135deg, rgba(108, 99, 255, 0.2) 0%, rgba(67, 232, 216, 0.1) 50%, rgba(255, 101, 132, 0.15) 100%);
                    }
                    .cta-rocket {
                        display: inline-block;
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                        animation: wiggle 5s ease-in-out infinite;
                    }
                    @keyframes wiggle {
                        0%, 60%, 100% { transform: rotate(0); }
                        10%, 30% { transform: rotate(10deg); }
                        20%, 40% { transform: rotate(-10deg); }
                    }
                    .cta-links { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
                    .cta-link {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        color: white;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: transform 0.2s, border-color 0.3s;
                    }
                    .cta-link:hover { transform: scale(1.05); border-color: rgba(108, 99, 255, 0.4); }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: start;
                    }
                    .process-intro { margin-bottom: 2.5rem; }
                    .process-title { color: white; font-size: 2.25rem; font-weight: 900; margin-bottom: 1rem; }
                    .process-copy { color: #8888aa; line-height: 1.6; }
                    .process-step { display: flex; gap: 1.25rem; }
                    .process-rail { display: flex; flex-direction: column; align-items: center; }
                    .process-number {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #6c63ff;
                        font-weight: 900;
                        font-size: 0.875rem;
                        border: 1px solid rgba(108, 99, 255, 0.3);
                        background: rgba(108, 99, 255, 0.2);
                    }
                    .process-line {
                        width: 1px;
                        flex: 1;
                        min-height: 2rem;
                        margin-top: 0.5rem;
                        background: linear-gradient(rgba(108, 99, 255, 0.3), transparent);
                    }
                    .process-body { padding-bottom: 1.5rem; }
                    .process-body h4 { color: white; font-size: 1.125rem; font-weight: 700; margin: 0 0 0.25rem; }
                    .process-body p { color: #8888aa; font-size: 0.875rem; line-height: 1.6; margin: 0; }
                    .worldwide {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(67, 232, 216, 0.2);
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .worldwide-title { color: white; font-weight: 600; font-size: 0.875rem; margin: 0; }
                    .worldwide-sub { color: #8888aa; font-size: 0.75rem; margin: 0; }
                    .form-panel {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(108, 99, 255, 0.2);
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .form-title { color: white; font-size: 1.5rem; font-weight: 900; margin: 0 0 0.5rem; }
                    .form-subtitle { color: #8888aa; font-size: 0.875rem; margin-bottom: 1.75rem; }
                    .quote-form { display: flex; flex-direction: column; gap: 1rem; }
                    .form-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; }
                    .quote-form label { display: flex; flex-direction: column; gap: 0.375rem; }
                    .quote-form label > span, .channel-label { color: #8888aa; font-size: 0.75rem; font-weight: 500; }
                    .quote-form input, .quote-form select, .quote-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: white;
                        font-size: 0.875rem;
                        font-family: inherit;
                        transition: border-color 0.2s;
                    }
                    .quote-form select { background: #12121f; }
                    .quote-form textarea { resize: none; }
                    .quote-form input:focus, .quote-form select:focus, .quote-form textarea:focus {
                        outline: none;
                        border-color: rgba(108, 99, 255, 0.5);
                    }
                    .channel-options { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
                    .channel-option {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.625rem 0;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        color: #8888aa;
                        font-weight: 600;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .channel-option:hover { color: white; }
                    .channel-option.whatsapp.active {
                        color: #25d366;
                        border-color: rgba(37, 211, 102, 0.5);
                        background: rgba(37, 211, 102, 0.15);
                    }
                    .channel-option.email.active {
                        color: #6c63ff;
                        border-color: rgba(108, 99, 255, 0.5);
                        background: rgba(108, 99, 255, 0.15);
                    }
                    .form-error { color: #ff6584; font-size: 0.875rem; margin: 0; }
                    .submit-button {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 0;
                        border: none;
                        border-radius: 1rem;
                        background: linear-gradient(90deg, #6c63ff, #43e8d8);
                        color: white;
                        font-weight: 700;
                        font-size: 1rem;
                        cursor: pointer;
                        box-shadow: 0 0 30px rgba(108, 99, 255, 0.3);
                        transition: transform 0.2s, opacity 0.2s;
                    }
                    .submit-button:hover { transform: scale(1.02); }
                    .submit-button:disabled { opacity: 0.7; cursor: wait; }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: white;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .form-note { color: #8888aa; font-size: 0.75rem; text-align: center; margin: 0; }
                    .sent-state { text-align: center; padding: 3rem 0; animation: popIn 0.4s ease-out; }
                    .sent-emoji { font-size: 3.75rem; margin-bottom: 1.5rem; }
                    .sent-state h3 { color: white; font-size: 1.5rem; font-weight: 900; margin-bottom: 0.75rem; }
                    .sent-state p { color: #8888aa; line-height: 1.6; }
                    .sent-reset {
                        margin-top: 1.5rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: rgba(108, 99, 255, 0.2);
                        color: #6c63ff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> QuoteRequest {
        QuoteRequest {
            name: "Ana Lima".to_string(),
            email: "ana@cafe.in".to_string(),
            business: "Café Lima".to_string(),
            budget: "₹15,000 – ₹30,000 (Growth)".to_string(),
            message: "Menu & bookings?".to_string(),
        }
    }

    #[test]
    fn missing_required_fields_are_rejected_in_order() {
        let mut quote = QuoteRequest::default();
        assert_eq!(quote.validate(), Err(QuoteError::MissingField("name")));

        quote.name = "Ana".to_string();
        quote.email = "   ".to_string();
        assert_eq!(quote.validate(), Err(QuoteError::MissingField("email")));

        quote.email = "ana@cafe.in".to_string();
        assert_eq!(quote.validate(), Err(QuoteError::MissingField("message")));

        quote.message = "hi".to_string();
        assert_eq!(quote.validate(), Ok(()));
    }

    #[test]
    fn error_names_the_field() {
        assert_eq!(QuoteError::MissingField("email").to_string(), "email is required");
    }

    #[test]
    fn whatsapp_link_is_percent_encoded() {
        let link = request().whatsapp_link("916238816702");
        assert!(link.starts_with("https://wa.me/916238816702?text="));

        let query = &link["https://wa.me/916238816702?text=".len()..];
        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(query.contains("%0A"));
        assert!(query.contains("Menu%20%26%20bookings%3F"));
    }

    #[test]
    fn whatsapp_text_decodes_to_the_quote() {
        let link = request().whatsapp_link("1");
        let text = urlencoding::decode(link.split_once("?text=").map(|(_, q)| q).unwrap_or_default())
            .unwrap()
            .into_owned();
        assert!(text.starts_with("Hi! I'd like a free quote for my website.\n\n"));
        assert!(text.contains("*Name:* Ana Lima\n"));
        assert!(text.contains("*Business:* Café Lima\n"));
        assert!(text.ends_with("*Project Details:* Menu & bookings?"));
    }

    #[test]
    fn blank_optional_fields_fall_back() {
        let quote = QuoteRequest {
            business: " ".to_string(),
            budget: String::new(),
            ..request()
        };
        let link = quote.whatsapp_link("1");
        let text = urlencoding::decode(link.split_once("?text=").map(|(_, q)| q).unwrap_or_default())
            .unwrap()
            .into_owned();
        assert!(text.contains("*Business:* Not provided\n"));
        assert!(text.contains("*Budget:* Not specified\n"));
    }

    #[test]
    fn mailto_subject_uses_business_then_name() {
        let link = request().mailto_link("team@example.com");
        assert!(link.starts_with("mailto:team@example.com?subject="));
        let (subject, body) = link["mailto:team@example.com?subject=".len()..]
            .split_once("&body=")
            .unwrap();
        assert_eq!(
            urlencoding::decode(subject).unwrap(),
            "Website Quote Request – Café Lima"
        );
        let body = urlencoding::decode(body).unwrap();
        assert!(body.contains("Budget: ₹15,000 – ₹30,000 (Growth)\n\n"));
        assert!(body.ends_with("Project Details:\nMenu & bookings?"));

        let anonymous = QuoteRequest {
            business: String::new(),
            ..request()
        };
        let link = anonymous.mailto_link("team@example.com");
        let subject = link
            .split_once("?subject=")
            .and_then(|(_, rest)| rest.split_once("&body="))
            .map(|(subject, _)| subject)
            .unwrap();
        assert_eq!(
            urlencoding::decode(subject).unwrap(),
            "Website Quote Request – Ana Lima"
        );
    }

    #[test]
    fn channel_picks_the_configured_destination() {
        let quote = request();
        assert!(quote.link(Channel::WhatsApp).starts_with(&format!("https://wa.me/{}", config::WHATSAPP_NUMBER)));
        assert!(quote.link(Channel::Email).starts_with(&format!("mailto:{}", config::CONTACT_EMAIL)));
    }
}
