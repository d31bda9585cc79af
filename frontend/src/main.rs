use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod layout;
mod animation {
    pub mod animator;
    pub mod host;
    pub mod loader;
    pub mod particles;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod page_loader;
    pub mod portfolio;
    pub mod pricing;
    pub mod reveal;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use animation::loader::LoaderStatus;
use components::page_loader::PageLoader;
use hooks::use_loader_phase;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let LoaderStatus { phase, ready } = use_loader_phase();

    html! {
        <BrowserRouter>
            <PageLoader {phase} />
            <div class={classes!("app-content", ready.then(|| "ready"))}>
                <Switch<Route> render={switch} />
            </div>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0a0f;
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    }
                    .app-content { opacity: 0; transition: opacity 0.5s ease-out; }
                    .app-content.ready { opacity: 1; }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
