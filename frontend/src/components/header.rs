use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    hooks::use_auth_token_sync,
    i18n::current::{common, header as t},
    router::Route,
    storage,
};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let signed_in = use_state(|| storage::credentials().read_auth_token().is_some());

    // Same-tab writes (dashboard login/logout) do not fire `storage`, so
    // re-read on every navigation as well.
    {
        let signed_in = signed_in.clone();
        use_effect_with(route.clone(), move |_| {
            signed_in.set(storage::credentials().read_auth_token().is_some());
            || ()
        });
    }
    {
        let signed_in = signed_in.clone();
        use_auth_token_sync(Callback::from(move |token: Option<String>| {
            signed_in.set(token.is_some())
        }));
    }

    let nav_items = [
        (t::HOME, Route::Home),
        (t::DASHBOARD, Route::Dashboard),
        (t::ADMIN, Route::Admin),
        (t::TERMS, Route::Terms),
    ];

    let link_classes = |active: bool| {
        classes!(
            "px-3",
            "py-2",
            "rounded-lg",
            "text-sm",
            "transition-colors",
            "duration-200",
            "hover:text-[var(--primary)]",
            "hover:bg-[var(--surface-alt)]",
            if active { "text-[var(--primary)] font-semibold" } else { "text-[var(--muted)]" }
        )
    };

    html! {
        <header class={classes!(
            "sticky", "top-0", "z-[80]", "w-full",
            "bg-[var(--surface)]",
            "shadow-[0_1px_0_rgba(var(--primary-rgb),0.08)]"
        )}>
            <div class={classes!(
                "flex", "items-center", "gap-4",
                "min-h-[var(--header-height-desktop)]",
                "max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8"
            )}>
                <Link<Route> to={Route::Home} classes="brand-logo font-bold text-lg">
                    { common::BRAND }
                </Link<Route>>
                <nav class={classes!("ml-auto", "flex", "items-center", "gap-1")}>
                    { for nav_items.iter().map(|(label, target)| {
                        let active = route.as_ref() == Some(target);
                        html! {
                            <Link<Route> to={target.clone()} classes={link_classes(active)}>
                                { *label }
                            </Link<Route>>
                        }
                    }) }
                    if !*signed_in {
                        <Link<Route> to={Route::Login} classes={classes!("btn-fluent-primary", "ml-2")}>
                            { t::SIGN_IN }
                        </Link<Route>>
                    }
                </nav>
            </div>
        </header>
    }
}
