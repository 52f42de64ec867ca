use gitlogs_shared::AdminCommand;
use serde_json::Value;
use yew::prelude::*;

use super::{action_button, store::AdminContext};
use crate::{components::result_view::JsonBlock, i18n::current::stats as t};

fn payload(data: &Option<Value>) -> Html {
    match data {
        Some(value) => html! { <JsonBlock value={value.clone()} /> },
        None => html! { <p class={classes!("m-0", "text-sm", "text-[var(--muted)]")}>{ t::NO_DATA }</p> },
    }
}

#[function_component(StatsTab)]
pub fn stats_tab() -> Html {
    let Some(store) = use_context::<AdminContext>() else {
        return Html::default();
    };

    html! {
        <div class={classes!("grid", "gap-6", "lg:grid-cols-2")}>
            <div>
                <div class={classes!("flex", "items-center", "justify-between", "mb-3")}>
                    <h2 class={classes!("m-0", "text-lg", "font-semibold")}>{ t::STATS_TITLE }</h2>
                    { action_button(&store, AdminCommand::RefreshStats, t::REFRESH_STATS) }
                </div>
                { payload(&store.stats.stats_data) }
            </div>
            <div>
                <div class={classes!("flex", "items-center", "justify-between", "mb-3")}>
                    <h2 class={classes!("m-0", "text-lg", "font-semibold")}>{ t::HEALTH_TITLE }</h2>
                    { action_button(&store, AdminCommand::RefreshHealth, t::REFRESH_HEALTH) }
                </div>
                { payload(&store.stats.health_data) }
            </div>
        </div>
    }
}
