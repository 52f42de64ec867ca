use gitlogs_shared::WorkflowResult;
use serde_json::Value;
use yew::prelude::*;

use crate::i18n::current::result as t;

pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[derive(Properties, PartialEq)]
pub struct ResultViewProps {
    pub result: Option<WorkflowResult>,
    /// Replaces the JSON dump on success.
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    let Some(result) = props.result.as_ref() else {
        return Html::default();
    };

    match result {
        WorkflowResult::Success(data) => {
            let body = if props.children == Html::default() {
                html! { <JsonBlock value={data.clone()} /> }
            } else {
                props.children.clone()
            };
            html! {
                <div class={classes!(
                    "mt-3",
                    "rounded-[var(--radius)]",
                    "border",
                    "border-emerald-400/40",
                    "bg-emerald-500/10",
                    "px-3",
                    "py-2",
                    "text-sm",
                    "text-emerald-700",
                    "dark:text-emerald-200"
                )}>
                    <p class={classes!("m-0", "mb-2", "font-semibold")}>{ format!("✅ {}", t::SUCCESS) }</p>
                    { body }
                </div>
            }
        },
        WorkflowResult::Failure(message) => html! {
            <div
                class={classes!(
                    "mt-3",
                    "rounded-[var(--radius)]",
                    "border",
                    "border-red-400/40",
                    "bg-red-500/10",
                    "px-3",
                    "py-2",
                    "text-sm",
                    "text-red-700",
                    "dark:text-red-200"
                )}
                role="alert"
            >
                <span class={classes!("font-semibold")}>{ format!("❌ {}: ", t::ERROR) }</span>
                { message.clone() }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct JsonBlockProps {
    pub value: Value,
}

#[function_component(JsonBlock)]
pub fn json_block(props: &JsonBlockProps) -> Html {
    html! {
        <pre class={classes!(
            "m-0",
            "max-h-96",
            "overflow-auto",
            "rounded-lg",
            "bg-[var(--surface-alt)]",
            "p-3",
            "text-xs",
            "text-[var(--text)]"
        )}>
            { pretty_json(&props.value) }
        </pre>
    }
}
