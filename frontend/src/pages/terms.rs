use yew::prelude::*;

use crate::i18n::current::terms as t;

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <main class={classes!("container", "py-8", "max-w-3xl")}>
            <h1 class={classes!("text-2xl", "font-semibold", "mb-6")}>{ t::TITLE }</h1>
            { for t::SECTIONS.iter().map(|(heading, body)| html! {
                <section class={classes!("mb-5")}>
                    <h2 class={classes!("m-0", "mb-2", "text-lg", "font-semibold")}>{ *heading }</h2>
                    <p class={classes!("m-0", "text-[var(--muted)]", "leading-relaxed")}>{ *body }</p>
                </section>
            }) }
        </main>
    }
}
