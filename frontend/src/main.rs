//! GitLogs dashboard, built as a Yew single-page app.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod logger;
mod pages;
mod router;
mod storage;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("gitlogs frontend starting against {:?}", config::backend().base_url());
    yew::Renderer::<App>::new().render();
}
