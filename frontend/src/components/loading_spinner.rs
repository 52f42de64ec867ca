use yew::prelude::*;

use crate::i18n::current::{common, loading_spinner as t};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
}

/// Spinning ring; `Small` renders inline inside buttons.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let inline = props.size == SpinnerSize::Small;

    html! {
        <span
            class={classes!(
                "items-center",
                "justify-center",
                if inline { classes!("inline-flex", "mr-2", "align-middle") } else { classes!("flex", "p-6") }
            )}
            role="status"
            aria-label={t::ARIA_LABEL}
            aria-busy="true"
        >
            <span
                style={spinner_style}
                class={classes!(
                    "inline-block",
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-transparent",
                    "bg-[conic-gradient(var(--primary),transparent)]",
                    "[mask:radial-gradient(farthest-side,transparent_calc(100%-4px),#000_calc(100%-3px))]",
                    "animate-[spin_0.9s_linear_infinite]"
                )}
            />
            <span class={classes!("sr-only")}>{ common::LOADING }</span>
        </span>
    }
}
