use payloads::{APIClient, CulturalPropertyId};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod auth;
pub mod cache;
pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;
pub mod utils;

use cache::QueryCache;
use components::layout::MainLayout;
use hooks::use_authentication;
use pages::{
    AboutPage, AnnouncementsPage, HomePage, ImportPreviewPage, LoginPage,
    NotFoundPage, PropertiesPage, PropertyDetailPage, RankingPage,
    SignUpPage,
};
pub use state::{AuthState, SessionState};

// API client per call site - configurable via environment or same-origin
// fallback, with the auth token picked up from local storage at call time.
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
        auth_token: auth::stored_token(),
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/properties")]
    Properties,
    #[at("/properties/:id")]
    PropertyDetail { id: CulturalPropertyId },
    #[at("/about")]
    About,
    #[at("/signup")]
    SignUp,
    #[at("/login")]
    Login,
    #[at("/ranking")]
    Ranking,
    #[at("/announcements")]
    Announcements,
    #[at("/import")]
    ImportPreview,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    // One cache per application instance; hooks pick it up from context.
    let cache = use_memo((), |_| QueryCache::new());
    use_authentication();

    html! {
        <BrowserRouter>
            <ContextProvider<QueryCache> context={(*cache).clone()}>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </ContextProvider<QueryCache>>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Properties => html! { <PropertiesPage /> },
        Route::PropertyDetail { id } => {
            html! { <PropertyDetailPage {id} /> }
        }
        Route::About => html! { <AboutPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Ranking => html! { <RankingPage /> },
        Route::Announcements => html! { <AnnouncementsPage /> },
        Route::ImportPreview => html! { <ImportPreviewPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
