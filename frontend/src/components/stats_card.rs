use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub label: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub tone: Option<&'static str>,
}

/// One overview tile: a muted label above a large value.
#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div
            class={classes!(
                "stats-card",
                "rounded-[var(--radius)]",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "p-4"
            )}
            role="status"
        >
            <span class={classes!("block", "text-xs", "uppercase", "tracking-[0.08em]", "text-[var(--muted)]")}>
                { props.label.clone() }
            </span>
            <strong class={classes!("stats-card-value", "block", "mt-1", "text-2xl", props.tone)}>
                { props.value.clone() }
            </strong>
        </div>
    }
}
