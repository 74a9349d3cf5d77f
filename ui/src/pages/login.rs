use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::{AuthState, SessionState};
use crate::{Route, auth, get_api_client};

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<SessionState>();

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Redirect to home if already logged in
    {
        let navigator = navigator.clone();
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username =
                username_ref.cast::<HtmlInputElement>().unwrap().value();
            let password =
                password_ref.cast::<HtmlInputElement>().unwrap().value();

            if username.is_empty() || password.is_empty() {
                error_message.set(Some(
                    "Please enter both username and password".to_string(),
                ));
                return;
            }

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                let credentials =
                    requests::LoginCredentials { username, password };
                match api_client.login(&credentials).await {
                    Ok(issued) => {
                        auth::store_token(&issued.token);
                        // Re-read the client so the profile call carries
                        // the fresh token.
                        match get_api_client().user_profile().await {
                            Ok(profile) => {
                                dispatch.reduce_mut(|state| {
                                    state.auth_state =
                                        AuthState::LoggedIn(profile);
                                });
                                navigator.push(&Route::Home);
                            }
                            Err(e) => {
                                error_message.set(Some(e.to_string()));
                            }
                        }
                    }
                    Err(e) => {
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-800 text-sm";

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <div class="text-center space-y-1">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                        {"Sign in to Cultural Atlas"}
                    </h1>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Enter your credentials to continue"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-3">
                    <input
                        ref={username_ref}
                        type="text"
                        placeholder="Username"
                        class={input_class}
                    />
                    <input
                        ref={password_ref}
                        type="password"
                        placeholder="Password"
                        class={input_class}
                    />
                    {if let Some(error) = &*error_message {
                        html! {
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {error}
                            </p>
                        }
                    } else {
                        html! {}
                    }}
                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full px-4 py-2 rounded-md bg-neutral-900 \
                               dark:bg-white text-white dark:text-neutral-900 \
                               text-sm font-medium disabled:opacity-50"
                    >
                        {if *is_loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {"Don't have an account? "}
                    <Link<Route>
                        to={Route::SignUp}
                        classes="font-medium underline text-neutral-900 dark:text-neutral-100"
                    >
                        {"Create one"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
