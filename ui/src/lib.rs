use payloads::{APIClient, OrphanageId};
use yew::prelude::*;
use yew_router::prelude::*;

mod logs;

pub mod components;
pub mod form;
pub mod hooks;
pub mod pages;

use pages::{DashboardPage, EditOrphanagePage, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/orphanages/:id/edit")]
    EditOrphanage { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <Redirect<Route> to={Route::Dashboard} />
        },
        Route::Dashboard => html! {
            <DashboardPage />
        },
        Route::EditOrphanage { id } => html! {
            <EditOrphanagePage id={OrphanageId(id)} />
        },
        Route::NotFound => html! {
            <NotFoundPage />
        },
    }
}
