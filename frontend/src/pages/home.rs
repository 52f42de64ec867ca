use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::home as t, router::Route, storage};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let signed_in = storage::credentials().read_auth_token().is_some();
    let (cta_label, cta_route) = if signed_in {
        (t::CTA_DASHBOARD, Route::Dashboard)
    } else {
        (t::CTA_LOGIN, Route::Login)
    };

    html! {
        <main class={classes!("container", "py-16")}>
            <section class={classes!(
                "mx-auto",
                "max-w-2xl",
                "text-center",
                "bg-[var(--surface)]",
                "border",
                "border-[var(--border)]",
                "rounded-[var(--radius)]",
                "shadow-[var(--shadow)]",
                "p-10"
            )}>
                <h1 class={classes!("m-0", "text-4xl", "font-bold")}>{ t::TITLE }</h1>
                <p class={classes!("mt-3", "mb-8", "text-lg", "text-[var(--muted)]")}>{ t::TAGLINE }</p>
                <Link<Route> to={cta_route} classes={classes!("btn-fluent-primary")}>
                    { cta_label }
                </Link<Route>>
            </section>
        </main>
    }
}
