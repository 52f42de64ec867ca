use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{api, i18n::current::login as t, router::Route, storage};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let signed_in = storage::credentials().read_auth_token().is_some();

    html! {
        <main class={classes!("container", "py-16")}>
            <section class={classes!(
                "mx-auto",
                "max-w-md",
                "bg-[var(--surface)]",
                "border",
                "border-[var(--border)]",
                "rounded-[var(--radius)]",
                "shadow-[var(--shadow)]",
                "p-8",
                "text-center"
            )}>
                <h1 class={classes!("m-0", "mb-3", "text-2xl", "font-semibold")}>{ t::TITLE }</h1>
                <p class={classes!("mb-6", "text-sm", "text-[var(--muted)]")}>{ t::BODY }</p>
                if signed_in {
                    <p class={classes!("mb-4", "text-sm")}>{ t::ALREADY }</p>
                    <Link<Route> to={Route::Dashboard} classes={classes!("btn-fluent-primary")}>
                        { t::GO_DASHBOARD }
                    </Link<Route>>
                } else {
                    <a href={api::github_login_url()} class={classes!("btn-fluent-primary")}>
                        <i class={classes!("fab", "fa-github", "mr-2")} aria-hidden="true"></i>
                        { t::GITHUB }
                    </a>
                }
            </section>
        </main>
    }
}
