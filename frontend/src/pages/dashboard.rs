use gitlogs_shared::{
    account::{add_my_repo_request, CurrentUser, MyRepo},
    ApiError, OAuthCallback,
};
use wasm_bindgen::JsValue;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        error_banner::{BannerTone, ErrorBanner},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::{current::dashboard as t, fill_one},
    router::Route,
    storage,
};

/// Reads `?auth=success` / `?error=..` once and strips it from the address
/// bar.
fn take_oauth_callback() -> Option<OAuthCallback> {
    let window = web_sys::window()?;
    let location = window.location();
    let callback = OAuthCallback::from_query(&location.search().ok()?)?;
    if let (Ok(history), Ok(path)) = (window.history(), location.pathname()) {
        if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
            log::warn!("clearing the sign-in query failed: {err:?}");
        }
    }
    Some(callback)
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user = use_state(|| None::<CurrentUser>);
    let repos = use_state(Vec::<MyRepo>::new);
    let loading = use_state(|| true);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);
    let banner = use_state(|| None::<OAuthCallback>);
    let new_repo = use_state(String::new);
    let navigator = use_navigator();

    let reload_repos = {
        let repos = repos.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let repos = repos.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_my_repos().await {
                    Ok(list) => repos.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    {
        let user = user.clone();
        let loading = loading.clone();
        let error = error.clone();
        let banner = banner.clone();
        let reload_repos = reload_repos.clone();
        use_effect_with((), move |_| {
            banner.set(take_oauth_callback());
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_current_user().await {
                    Ok(Some(current)) => {
                        storage::credentials().write_auth_token(&current.session_marker());
                        user.set(Some(current));
                        reload_repos.emit(());
                    },
                    Ok(None) => {
                        storage::credentials().clear_auth_token();
                        user.set(None);
                    },
                    Err(err @ ApiError::Network(_)) => error.set(Some(err.to_string())),
                    Err(err) => {
                        log::info!("not signed in: {err}");
                        storage::credentials().clear_auth_token();
                        user.set(None);
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_repo_input = {
        let new_repo = new_repo.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                new_repo.set(target.value());
            }
        })
    };

    let run_mutation = {
        let busy = busy.clone();
        let error = error.clone();
        let reload_repos = reload_repos.clone();
        Callback::from(move |request: gitlogs_shared::ApiRequest| {
            let busy = busy.clone();
            let error = error.clone();
            let reload_repos = reload_repos.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_my_repos(request).await {
                    Ok(_) => {
                        error.set(None);
                        reload_repos.emit(());
                    },
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let on_add = {
        let new_repo = new_repo.clone();
        let error = error.clone();
        let run_mutation = run_mutation.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match add_my_repo_request(&new_repo) {
                Ok(request) => {
                    new_repo.set(String::new());
                    run_mutation.emit(request);
                },
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let on_logout = {
        let user = user.clone();
        Callback::from(move |_: MouseEvent| {
            let user = user.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = api::logout().await {
                    log::warn!("logout request failed: {err}");
                }
                storage::credentials().clear_auth_token();
                user.set(None);
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            });
        })
    };

    let banner_html = match (*banner).clone() {
        Some(callback) => {
            let tone = match callback {
                OAuthCallback::Success => BannerTone::Notice,
                OAuthCallback::Error(_) => BannerTone::Error,
            };
            let on_close = {
                let banner = banner.clone();
                Callback::from(move |_| banner.set(None))
            };
            html! {
                <div class={classes!("mb-4")}>
                    <ErrorBanner message={callback.message()} tone={tone} auto_dismiss={false} on_close={on_close} />
                </div>
            }
        },
        None => Html::default(),
    };

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(current) = (*user).clone() {
        html! {
            <>
                <div class={classes!("flex", "items-center", "justify-between", "gap-3", "flex-wrap", "mb-5")}>
                    <div class={classes!("flex", "items-center", "gap-3")}>
                        if let Some(avatar) = current.avatar.clone() {
                            <img src={avatar} alt="" class={classes!("w-10", "h-10", "rounded-full")} />
                        }
                        <p class={classes!("m-0", "text-sm")}>{ fill_one(t::GREETING_TEMPLATE, current.display_name()) }</p>
                    </div>
                    <button class={classes!("btn-fluent-secondary")} onclick={on_logout}>{ t::LOGOUT }</button>
                </div>

                <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::REPOS_TITLE }</h2>
                <form class={classes!("flex", "gap-2", "mb-4")} onsubmit={on_add}>
                    <input
                        type="text"
                        placeholder={t::ADD_PLACEHOLDER}
                        value={(*new_repo).clone()}
                        oninput={on_repo_input}
                        class={classes!("flex-1", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2")}
                    />
                    <button type="submit" class={classes!("btn-fluent-primary")} disabled={*busy}>
                        if *busy {
                            <LoadingSpinner size={SpinnerSize::Small} />
                        }
                        { t::ADD }
                    </button>
                </form>
                if repos.is_empty() {
                    <p class={classes!("text-sm", "text-[var(--muted)]")}>{ t::EMPTY }</p>
                } else {
                    <ul class={classes!("m-0", "p-0", "list-none", "divide-y", "divide-[var(--border)]")}>
                        { for repos.iter().map(|repo| {
                            let on_remove = {
                                let repo = repo.clone();
                                let error = error.clone();
                                let run_mutation = run_mutation.clone();
                                Callback::from(move |_: MouseEvent| match repo.remove_request() {
                                    Ok(request) => run_mutation.emit(request),
                                    Err(err) => error.set(Some(err.to_string())),
                                })
                            };
                            html! {
                                <li class={classes!("flex", "items-center", "justify-between", "py-2")}>
                                    <span class={classes!("font-mono", "text-sm")}>{ repo.row.repo_full_name.clone() }</span>
                                    <button class={classes!("btn-fluent-secondary")} onclick={on_remove} disabled={*busy}>
                                        { t::REMOVE }
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </>
        }
    } else {
        html! {
            <div class={classes!("text-center", "py-6")}>
                <p class={classes!("mb-4", "text-sm", "text-[var(--muted)]")}>{ t::SIGNED_OUT }</p>
                <a href={api::github_login_url()} class={classes!("btn-fluent-primary")}>{ t::SIGN_IN }</a>
            </div>
        }
    };

    html! {
        <main class={classes!("container", "py-8")}>
            { banner_html }
            <section class={classes!(
                "bg-[var(--surface)]",
                "border",
                "border-[var(--border)]",
                "rounded-[var(--radius)]",
                "shadow-[var(--shadow)]",
                "p-5"
            )}>
                <h1 class={classes!("m-0", "mb-4", "text-xl", "font-semibold")}>{ t::TITLE }</h1>
                if let Some(message) = (*error).clone() {
                    <ErrorBanner message={message} />
                }
                { body }
            </section>
        </main>
    }
}
