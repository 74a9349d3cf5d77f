use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, get_api_client};

#[function_component]
pub fn SignUpPage() -> Html {
    let navigator = use_navigator().unwrap();

    let email_ref = use_node_ref();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_password_ref = confirm_password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email_ref.cast::<HtmlInputElement>().unwrap().value();
            let username =
                username_ref.cast::<HtmlInputElement>().unwrap().value();
            let password =
                password_ref.cast::<HtmlInputElement>().unwrap().value();
            let confirm_password = confirm_password_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value();

            let validation = requests::validate_sign_up(
                &email,
                &username,
                &password,
                &confirm_password,
            );
            if let Some(message) = validation.error_message() {
                error_message.set(Some(message.to_string()));
                return;
            }

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                let details =
                    requests::CreateAccount { email, username, password };
                match api_client.create_account(&details).await {
                    Ok(()) => {
                        navigator.push(&Route::Login);
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
                        {"Create your account"}
                    </h1>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Join Cultural Atlas to register properties"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-3">
                    <input
                        ref={email_ref}
                        type="email"
                        placeholder="Email"
                        class={input_class}
                    />
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
                    <input
                        ref={confirm_password_ref}
                        type="password"
                        placeholder="Confirm password"
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
                        {if *is_loading { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {"Already have an account? "}
                    <Link<Route>
                        to={Route::Login}
                        classes="font-medium underline text-neutral-900 dark:text-neutral-100"
                    >
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
