use gitlogs_shared::{admin::OgPostField, AdminAction, AdminCommand};
use yew::prelude::*;

use super::{action_button, store::AdminContext, text_field};
use crate::{components::result_view::ResultView, i18n::current::og_posts as t};

#[function_component(OgPostsTab)]
pub fn og_posts_tab() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };
    let form = &store.og_posts;
    let edit = |field: OgPostField| {
        let store = store.clone();
        Callback::from(move |value: String| store.dispatch(AdminAction::EditOgPost(field, value)))
    };

    html! {
        <>
            <h2 class={classes!("m-0", "mb-1", "text-lg", "font-semibold")}>{ t::TITLE }</h2>
            <p class={classes!("m-0", "mb-4", "text-sm", "text-[var(--muted)]")}>{ t::HINT }</p>
            <div class={classes!("grid", "gap-4", "md:grid-cols-2")}>
                { text_field(t::REPO_LABEL, &form.repo_full_name, t::REPO_PLACEHOLDER, edit(OgPostField::RepoFullName)) }
                { text_field(t::TWEET_LABEL, &form.tweet_id, t::TWEET_PLACEHOLDER, edit(OgPostField::TweetId)) }
            </div>
            <div class={classes!("flex", "gap-2", "mt-2")}>
                { action_button(&store, AdminCommand::SetOgPost, t::SET) }
                { action_button(&store, AdminCommand::GetOgPost, t::GET) }
            </div>
            <ResultView result={form.result.clone()} />
        </>
    }
}
