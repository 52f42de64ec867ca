use gitlogs_shared::{
    admin::{Tier, UserField},
    AdminAction, AdminCommand,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::{
    action_button, input_classes,
    store::AdminContext,
    text_field,
};
use crate::{components::result_view::ResultView, i18n::current::users as t};

#[function_component(UsersTab)]
pub fn users_tab() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };
    let form = &store.users;
    let edit = |field: UserField| {
        let store = store.clone();
        Callback::from(move |value: String| store.dispatch(AdminAction::EditUser(field, value)))
    };
    let on_tier = {
        let store = store.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                store.dispatch(AdminAction::SetTier(Tier::from_str_lossy(&target.value())));
            }
        })
    };

    html! {
        <div class={classes!("grid", "gap-6", "lg:grid-cols-2")}>
            <div>
                <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::UPSERT_TITLE }</h2>
                { text_field(t::USER_ID, &form.user_id, "", edit(UserField::UserId)) }
                { text_field(t::GITHUB_USERNAME, &form.github_username, "", edit(UserField::GithubUsername)) }
                { text_field(t::DISPLAY_NAME, &form.display_name, "", edit(UserField::DisplayName)) }
                { text_field(t::EMAIL, &form.email, "", edit(UserField::Email)) }
                <label class={classes!("block", "text-sm", "mb-3")}>
                    { t::TIER }
                    <select class={input_classes()} onchange={on_tier}>
                        { for Tier::ALL.iter().map(|tier| html! {
                            <option value={tier.as_str()} selected={*tier == form.tier}>{ tier.as_str() }</option>
                        }) }
                    </select>
                </label>
                { action_button(&store, AdminCommand::UpsertUser, t::UPSERT) }
                <ResultView result={form.upsert_result.clone()} />
            </div>
            <div>
                <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::LOOKUP_TITLE }</h2>
                { text_field(t::USER_ID, &form.lookup_id, "", edit(UserField::LookupId)) }
                { action_button(&store, AdminCommand::LookupUser, t::LOOKUP) }
                <ResultView result={form.lookup_result.clone()} />
            </div>
        </div>
    }
}
