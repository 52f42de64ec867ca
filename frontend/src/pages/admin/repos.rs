use gitlogs_shared::{
    admin::{RepoField, RepoListing, RepoRow},
    AdminAction, AdminCommand, WorkflowResult,
};
use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::{
    action_button,
    store::AdminContext,
    text_field,
};
use crate::{
    components::result_view::{JsonBlock, ResultView},
    i18n::current::repos as t,
};

fn format_created(row: &RepoRow) -> String {
    match row.created_at_millis() {
        Some(ms) => Date::new(&JsValue::from_f64(ms as f64))
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into(),
        None => row.created_at_raw.clone().unwrap_or_else(|| "--".to_string()),
    }
}

fn active_badge(active: bool) -> Html {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded-full",
        "px-2",
        "py-0.5",
        "text-xs",
        "font-semibold"
    );
    if active {
        html! { <span class={classes!(base, "bg-emerald-500/15", "text-emerald-700", "dark:text-emerald-200")}>{ t::YES }</span> }
    } else {
        html! { <span class={classes!(base, "bg-slate-500/15", "text-slate-700", "dark:text-slate-200")}>{ t::NO }</span> }
    }
}

fn repo_listing(result: &Option<WorkflowResult>) -> Html {
    let Some(WorkflowResult::Success(data)) = result else {
        return Html::default();
    };
    match RepoListing::classify(data) {
        RepoListing::Table(rows) => html! {
            <table class={classes!("w-full", "text-sm", "text-left")}>
                <thead>
                    <tr>
                        <th class={classes!("py-1")}>{ t::COL_REPO }</th>
                        <th class={classes!("py-1")}>{ t::COL_ACTIVE }</th>
                        <th class={classes!("py-1")}>{ t::COL_CREATED }</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr class={classes!("border-t", "border-[var(--border)]")}>
                            <td class={classes!("py-1", "font-mono")}>{ row.repo_full_name.clone() }</td>
                            <td class={classes!("py-1")}>{ active_badge(row.is_active) }</td>
                            <td class={classes!("py-1")}>{ format_created(row) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
        RepoListing::Empty => html! { <p class={classes!("m-0")}>{ t::EMPTY }</p> },
        RepoListing::Raw => html! { <JsonBlock value={data.clone()} /> },
    }
}

#[function_component(ReposTab)]
pub fn repos_tab() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };
    let form = &store.repos;
    let edit = |field: RepoField| {
        let store = store.clone();
        Callback::from(move |value: String| store.dispatch(AdminAction::EditRepo(field, value)))
    };

    html! {
        <div class={classes!("grid", "gap-6", "lg:grid-cols-3")}>
            <div>
                <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::ADD_TITLE }</h2>
                { text_field(t::USER_ID, &form.user_id, "", edit(RepoField::UserId)) }
                { text_field(t::REPO, &form.repo_full_name, t::REPO_PLACEHOLDER, edit(RepoField::RepoFullName)) }
                { text_field(t::WEBHOOK_SECRET, &form.webhook_secret, "", edit(RepoField::WebhookSecret)) }
                { action_button(&store, AdminCommand::AddRepo, t::ADD) }
                <ResultView result={form.add_result.clone()} />
            </div>
            <div>
                <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::CONTEXT_TITLE }</h2>
                { text_field(t::REPO, &form.context_repo, t::REPO_PLACEHOLDER, edit(RepoField::ContextRepo)) }
                { action_button(&store, AdminCommand::GetRepoContext, t::CONTEXT) }
                <ResultView result={form.context_result.clone()} />
            </div>
            <div>
                <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::LIST_TITLE }</h2>
                { text_field(t::USER_ID, &form.list_user_id, "", edit(RepoField::ListUserId)) }
                { action_button(&store, AdminCommand::ListUserRepos, t::LIST) }
                <ResultView result={form.list_result.clone()}>
                    { repo_listing(&form.list_result) }
                </ResultView>
            </div>
        </div>
    }
}
