use yew::prelude::*;

use crate::components::{
    contact::Contact, footer::Footer, hero::Hero, navbar::Navbar, portfolio::Portfolio,
    pricing::Pricing, services::Services, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Navbar />
            <main>
                <Hero />
                <Services />
                <Portfolio />
                <Testimonials />
                <Pricing />
                <Contact />
            </main>
            <Footer />

            <style>
                {r#"
                    .home {
                        min-height: 100vh;
                        background: #0a0a0f;
                        color: white;
                        overflow-x: hidden;
                    }
                    .section {
                        position: relative;
                        padding: 7rem 0;
                        overflow: hidden;
                    }
                    .section-inner {
                        position: relative;
                        z-index: 1;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-header { text-align: center; margin-bottom: 4rem; }
                    .section-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid;
                        background: rgba(255, 255, 255, 0.03);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .section-title {
                        color: white;
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 900;
                        margin: 0 0 1.25rem;
                    }
                    .section-subtitle {
                        max-width: 36rem;
                        margin: 0 auto 2rem;
                        color: #8888aa;
                        font-size: 1.125rem;
                        line-height: 1.6;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #6c63ff, #43e8d8, #ff6584);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .shimmer-text {
                        background: linear-gradient(90deg, #ffffff 0%, #8888aa 40%, #ffffff 60%, #ffffff 100%);
                        background-size: 200% auto;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: shimmer 3s linear infinite;
                    }
                    @keyframes shimmer {
                        to { background-position: -200% center; }
                    }
                    .gradient-button {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 1rem;
                        background: linear-gradient(90deg, #6c63ff, #43e8d8);
                        color: white;
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 0 30px rgba(108, 99, 255, 0.3);
                        transition: transform 0.2s;
                    }
                    .gradient-button:hover { transform: scale(1.05); }
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.visible { opacity: 1; transform: none; }
                    .fade-up { animation: fadeUp 0.8s ease-out both; }
                    .fade-in { animation: fadeIn 0.8s ease-out both; }
                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: none; }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal { opacity: 1; transform: none; transition: none; }
                    }
                "#}
            </style>
        </div>
    }
}
