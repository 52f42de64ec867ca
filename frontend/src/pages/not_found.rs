use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("container", "py-16", "text-center")}>
            <h2 class={classes!("text-4xl", "font-bold", "m-0")}>{ t::TITLE }</h2>
            <p class={classes!("text-[var(--muted)]")}>{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-fluent-secondary")}>
                { t::BACK }
            </Link<Route>>
        </main>
    }
}
