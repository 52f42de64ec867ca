pub mod og_posts;
pub mod repos;
pub mod stats;
pub mod store;
pub mod users;

use gitlogs_shared::{AdminAction, AdminCommand, AdminView, Mode, OverviewStatus, TabId};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use self::store::{command_callback, AdminContext, AdminStore};
use crate::{
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        stats_card::StatsCard,
    },
    hooks::{use_auth_token_sync, use_health_poller, use_save_notice_timeout},
    i18n::current::admin as t,
    router::Route,
    storage,
};

pub(crate) fn panel_classes() -> Classes {
    classes!(
        "bg-[var(--surface)]",
        "border",
        "border-[var(--border)]",
        "rounded-[var(--radius)]",
        "shadow-[var(--shadow)]",
        "p-5",
        "mb-5"
    )
}

pub(crate) fn input_classes() -> Classes {
    classes!("mt-1", "w-full", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2")
}

/// Label + text input bound to one form field.
pub(crate) fn text_field(
    label: &'static str,
    value: &str,
    placeholder: &'static str,
    on_change: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |event: InputEvent| {
        if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
            on_change.emit(target.value());
        }
    });
    html! {
        <label class={classes!("block", "text-sm", "mb-2")}>
            { label }
            <input type="text" value={value.to_string()} placeholder={placeholder} class={input_classes()} {oninput} />
        </label>
    }
}

/// Primary button running `command`: disabled while the gate is closed or
/// its slot has a request outstanding, with an inline spinner for the latter.
pub(crate) fn action_button(store: &AdminContext, command: AdminCommand, label: &'static str) -> Html {
    let slot = command.slot();
    let loading = store.is_loading(slot);
    let onclick = command_callback(store, command);
    html! {
        <button class={classes!("btn-fluent-primary")} {onclick} disabled={!store.can_submit(slot)}>
            if loading {
                <LoadingSpinner size={SpinnerSize::Small} />
            }
            { label }
        </button>
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let store = use_reducer(AdminStore::load);

    {
        let store = store.clone();
        use_auth_token_sync(Callback::from(move |token| {
            store.dispatch(AdminAction::AuthTokenChanged(token))
        }));
    }
    use_health_poller(store.clone());
    use_save_notice_timeout(store.clone());

    let body = match store.view() {
        AdminView::Locked => html! { <LockedPanel /> },
        AdminView::UserModeCard => html! {
            <>
                <ModeSwitcher />
                <section class={panel_classes()}>
                    <h2 class={classes!("m-0", "mb-2", "text-lg", "font-semibold")}>{ t::USER_MODE_TITLE }</h2>
                    <p class={classes!("m-0", "text-sm", "text-[var(--muted)]")}>{ t::USER_MODE_BODY }</p>
                </section>
            </>
        },
        AdminView::AdminSurface => html! {
            <>
                <ModeSwitcher />
                <ApiKeyBar />
                <OverviewCards />
                <TabPanels />
            </>
        },
    };

    html! {
        <ContextProvider<AdminContext> context={store}>
            <main class={classes!("container", "py-8")}>
                <section class={panel_classes()}>
                    <h1 class={classes!("m-0", "text-xl", "font-semibold")}>{ t::TITLE }</h1>
                    <p class={classes!("m-0", "text-sm", "text-[var(--muted)]")}>{ t::SUBTITLE }</p>
                </section>
                { body }
            </main>
        </ContextProvider<AdminContext>>
    }
}

#[function_component(LockedPanel)]
fn locked_panel() -> Html {
    html! {
        <section class={classes!(panel_classes(), "text-center")}>
            <h2 class={classes!("m-0", "mb-2", "text-lg", "font-semibold")}>{ t::LOCKED_TITLE }</h2>
            <p class={classes!("mb-4", "text-sm", "text-[var(--muted)]")}>{ t::LOCKED_BODY }</p>
            <div class={classes!("flex", "justify-center", "gap-2")}>
                <Link<Route> to={Route::Login} classes={classes!("btn-fluent-primary")}>{ t::LOCKED_LOGIN }</Link<Route>>
                <Link<Route> to={Route::Home} classes={classes!("btn-fluent-secondary")}>{ t::LOCKED_HOME }</Link<Route>>
            </div>
        </section>
    }
}

#[function_component(ModeSwitcher)]
fn mode_switcher() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };
    let button = |mode: Mode, label: &'static str| {
        let store = store.clone();
        let active = store.mode() == mode;
        html! {
            <button
                class={if active { classes!("btn-fluent-primary") } else { classes!("btn-fluent-secondary") }}
                aria-pressed={active.to_string()}
                onclick={Callback::from(move |_| store.dispatch(AdminAction::SetMode(mode)))}
            >
                { label }
            </button>
        }
    };
    html! {
        <div class={classes!("flex", "gap-2", "mb-5")} role="group" aria-label={t::MODE_ARIA}>
            { button(Mode::User, t::MODE_USER) }
            { button(Mode::Admin, t::MODE_ADMIN) }
        </div>
    }
}

#[function_component(ApiKeyBar)]
fn api_key_bar() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };

    let on_input = {
        let store = store.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                store.dispatch(AdminAction::EditApiKey(target.value()));
            }
        })
    };
    let on_toggle = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(AdminAction::ToggleKeyVisible))
    };
    let on_save = {
        let store = store.clone();
        Callback::from(move |_| {
            storage::credentials().write_admin_key(store.api_key());
            store.dispatch(AdminAction::ApiKeySaved);
        })
    };

    html! {
        <section class={panel_classes()}>
            <label class={classes!("block", "text-sm")} for="admin-api-key">{ t::API_KEY_LABEL }</label>
            <div class={classes!("flex", "items-center", "gap-2", "flex-wrap", "mt-1")}>
                <input
                    id="admin-api-key"
                    type={if store.key_visible() { "text" } else { "password" }}
                    autocomplete="off"
                    value={store.api_key().to_string()}
                    placeholder={t::API_KEY_PLACEHOLDER}
                    oninput={on_input}
                    class={classes!("flex-1", "min-w-[16rem]", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2", "font-mono")}
                />
                <button class={classes!("btn-fluent-secondary")} onclick={on_toggle}>
                    { if store.key_visible() { t::HIDE_KEY } else { t::SHOW_KEY } }
                </button>
                <button class={classes!("btn-fluent-primary")} onclick={on_save}>{ t::SAVE_KEY }</button>
                if let Some(notice) = store.save_notice() {
                    <span class={classes!("text-sm", "text-emerald-600", "dark:text-emerald-300")} role="status">
                        { notice.text }
                    </span>
                }
            </div>
            if !store.can_use_admin() {
                <p class={classes!("m-0", "mt-2", "text-xs", "text-[var(--muted)]")}>{ t::KEY_MISSING }</p>
            }
        </section>
    }
}

#[function_component(OverviewCards)]
fn overview_cards() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };
    let overview = store.overview();
    let status_tone = match overview.status {
        OverviewStatus::Ok => Some("text-emerald-600"),
        OverviewStatus::Error => Some("text-red-600"),
        OverviewStatus::Unknown => None,
    };

    html! {
        <section class={classes!("grid", "gap-4", "grid-cols-2", "md:grid-cols-4", "mb-5")}>
            <StatsCard label={t::OVERVIEW_STATUS} value={overview.status.to_string()} tone={status_tone} />
            <StatsCard label={t::OVERVIEW_QUEUE} value={overview.queue.to_string()} />
            <StatsCard label={t::OVERVIEW_PROCESSING} value={overview.processing.to_string()} />
            <StatsCard label={t::OVERVIEW_RATE_LIMIT} value={overview.rate_limit.to_string()} />
        </section>
    }
}

#[function_component(TabPanels)]
fn tab_panels() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };
    let active = store.active_tab();

    html! {
        <>
            <nav class={classes!("flex", "gap-2", "flex-wrap", "mb-4")} role="tablist">
                { for TabId::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let store = store.clone();
                    html! {
                        <button
                            id={format!("tab-{}", tab.slug())}
                            role="tab"
                            aria-selected={(tab == active).to_string()}
                            class={if tab == active { classes!("btn-fluent-primary") } else { classes!("btn-fluent-secondary") }}
                            onclick={Callback::from(move |_| store.dispatch(AdminAction::SelectTab(tab)))}
                        >
                            { tab.label() }
                        </button>
                    }
                }) }
            </nav>
            <section class={panel_classes()} role="tabpanel" aria-labelledby={format!("tab-{}", active.slug())}>
                { match active {
                    TabId::OgPosts => html! { <og_posts::OgPostsTab /> },
                    TabId::Users => html! { <users::UsersTab /> },
                    TabId::Repos => html! { <repos::ReposTab /> },
                    TabId::Stats => html! { <stats::StatsTab /> },
                } }
            </section>
        </>
    }
}
