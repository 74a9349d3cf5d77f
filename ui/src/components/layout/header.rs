use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::SessionState;
use crate::{Route, auth};

#[function_component]
pub fn Header() -> Html {
    let (state, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator().expect("header rendered inside a router");

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            auth::clear_token();
            dispatch.reduce_mut(|state| state.logout());
            navigator.push(&Route::Home);
        })
    };

    let nav_link = "text-sm font-medium text-neutral-600 \
                    dark:text-neutral-300 hover:text-neutral-900 \
                    dark:hover:text-white transition-colors";

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-xl font-semibold text-neutral-900 dark:text-white">
                                {"Cultural Atlas"}
                            </h1>
                        </Link<Route>>
                        <nav class="hidden sm:flex items-center space-x-6">
                            <Link<Route> to={Route::Properties} classes={nav_link}>
                                {"Properties"}
                            </Link<Route>>
                            <Link<Route> to={Route::Ranking} classes={nav_link}>
                                {"Ranking"}
                            </Link<Route>>
                            <Link<Route> to={Route::Announcements} classes={nav_link}>
                                {"Announcements"}
                            </Link<Route>>
                            <Link<Route> to={Route::About} classes={nav_link}>
                                {"About"}
                            </Link<Route>>
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        {if let Some(username) = state.username() {
                            html! {
                                <>
                                    <Link<Route> to={Route::ImportPreview} classes={nav_link}>
                                        {"Import"}
                                    </Link<Route>>
                                    <span class="text-sm text-neutral-600 dark:text-neutral-400">
                                        {username}
                                    </span>
                                    <button onclick={on_logout} class={nav_link}>
                                        {"Log out"}
                                    </button>
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    <Link<Route> to={Route::Login} classes={nav_link}>
                                        {"Log in"}
                                    </Link<Route>>
                                    <Link<Route> to={Route::SignUp} classes={nav_link}>
                                        {"Sign up"}
                                    </Link<Route>>
                                </>
                            }
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
