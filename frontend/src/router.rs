use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/auth")]
    Login,

    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard.html")]
    DashboardHtml,

    #[at("/admin")]
    Admin,
    #[at("/admin.html")]
    AdminHtml,

    #[at("/terms")]
    Terms,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Dashboard | Route::DashboardHtml => {
            html! { <pages::dashboard::DashboardPage /> }
        },
        Route::Admin | Route::AdminHtml => html! { <pages::admin::AdminPage /> },
        Route::Terms => html! { <pages::terms::TermsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
