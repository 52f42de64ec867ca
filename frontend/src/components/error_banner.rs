use gitlogs_shared::admin::SAVE_NOTICE_MS;
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerTone {
    #[default]
    Error,
    Notice,
}

impl BannerTone {
    /// Errors stay up longer than confirmations, which share the key bar's
    /// notice delay.
    fn dismiss_after_ms(self) -> u32 {
        match self {
            BannerTone::Error => 4_000,
            BannerTone::Notice => SAVE_NOTICE_MS,
        }
    }

    fn parts(self) -> (&'static str, &'static str, Classes) {
        match self {
            BannerTone::Error => (
                "⚠️",
                t::TITLE,
                classes!("border-red-400/40", "bg-red-500/10", "text-red-700", "dark:text-red-200"),
            ),
            BannerTone::Notice => (
                "✅",
                t::NOTICE_TITLE,
                classes!(
                    "border-emerald-400/40",
                    "bg-emerald-500/10",
                    "text-emerald-700",
                    "dark:text-emerald-200"
                ),
            ),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub tone: BannerTone,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Dismissable alert; a new message reopens it.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if *is_open {
                is_open.set(false);
                if let Some(cb) = on_close.as_ref() {
                    cb.emit(());
                }
            }
        })
    };

    let delay = if props.auto_dismiss { props.tone.dismiss_after_ms() } else { 0 };
    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), delay)
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| is_open.set(true));
    }

    use_effect_with((*is_open, props.auto_dismiss, props.message.clone()), move |(open, auto, _)| {
        if *open && *auto {
            auto_timeout.reset();
        } else {
            auto_timeout.cancel();
        }
    });

    if !*is_open || props.message.trim().is_empty() {
        return Html::default();
    }

    let (icon, title, tone_classes) = props.tone.parts();
    let onclick = Callback::from(move |_: MouseEvent| dismiss.emit(()));

    html! {
        <div
            class={classes!("flex", "items-start", "gap-3", "rounded-xl", "border", "px-4", "py-3", "text-sm", "w-full", "max-w-2xl", tone_classes)}
            role="alert"
        >
            <span class="text-xl" aria-hidden="true">{ icon }</span>
            <div class="flex-1">
                <p class="m-0 font-semibold">{ title }</p>
                <p class="m-0">{ props.message.clone() }</p>
            </div>
            <button type="button" class={classes!("btn-fluent-secondary", "px-2")} aria-label={t::CLOSE_ARIA} {onclick}>
                {"×"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_clear_with_the_key_bar_notice() {
        assert_eq!(BannerTone::Notice.dismiss_after_ms(), SAVE_NOTICE_MS);
        assert!(BannerTone::Error.dismiss_after_ms() > BannerTone::Notice.dismiss_after_ms());
    }
}
