use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <div class="not-found-code gradient-text">{"404"}</div>
            <p>{"This page wandered off. The good stuff is on the home page."}</p>
            <Link<Route> to={Route::Home} classes="gradient-button">
                {"Back to home →"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 2rem;
                        text-align: center;
                        background: #0a0a0f;
                        color: #8888aa;
                    }
                    .not-found-code { font-size: 8rem; font-weight: 900; line-height: 1; }
                    .not-found .gradient-button { text-decoration: none; }
                "#}
            </style>
        </div>
    }
}
