use payloads::{requests, responses};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::get_api_client;

/// Paste CSV, get back per-row diagnostics from the server. Nothing is
/// persisted; the CSV is parsed and validated entirely server-side.
#[function_component]
pub fn ImportPreviewPage() -> Html {
    let csv_ref = use_node_ref();
    let rows = use_state(|| None::<Vec<responses::ImportPreviewRow>>);
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let csv_ref = csv_ref.clone();
        let rows = rows.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let csv = csv_ref.cast::<HtmlTextAreaElement>().unwrap().value();
            if csv.trim().is_empty() {
                error_message.set(Some("Paste some CSV first".to_string()));
                return;
            }

            let rows = rows.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                match api_client
                    .import_preview(&requests::ImportPreview { csv })
                    .await
                {
                    Ok(preview) => {
                        rows.set(Some(preview));
                    }
                    Err(e) => {
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-4xl mx-auto space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"CSV import preview"}
                </h1>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"One property per line: name, address, latitude, \
                      longitude. The server reports what an import would do \
                      without saving anything."}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-3">
                <textarea
                    ref={csv_ref}
                    rows="8"
                    placeholder="Great Bridge,1-1 Chuo,35.6812,139.7671"
                    class="w-full px-3 py-2 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-800 text-sm font-mono"
                />
                {if let Some(error) = &*error_message {
                    html! {
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    }
                } else {
                    html! {}
                }}
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white \
                           text-white dark:text-neutral-900 text-sm font-medium \
                           disabled:opacity-50"
                >
                    {if *is_loading { "Checking..." } else { "Preview import" }}
                </button>
            </form>

            {if let Some(rows) = &*rows {
                let importable = rows.iter().filter(|r| r.is_importable()).count();
                html! {
                    <div class="space-y-3">
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {format!("{importable} of {} rows importable", rows.len())}
                        </p>
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-neutral-500 dark:text-neutral-400 \
                                           border-b border-neutral-200 dark:border-neutral-700">
                                    <th class="py-2 w-12">{"Row"}</th>
                                    <th class="py-2">{"Name"}</th>
                                    <th class="py-2">{"Address"}</th>
                                    <th class="py-2">{"Coordinates"}</th>
                                    <th class="py-2">{"Problems"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for rows.iter().map(|row| html! {
                                    <tr class="border-b border-neutral-100 dark:border-neutral-800">
                                        <td class="py-2 text-neutral-500">{row.row_number}</td>
                                        <td class="py-2">{row.name.clone().unwrap_or_default()}</td>
                                        <td class="py-2">{row.address.clone().unwrap_or_default()}</td>
                                        <td class="py-2">
                                            {match (row.latitude, row.longitude) {
                                                (Some(lat), Some(lng)) => {
                                                    format!("{lat:.5}, {lng:.5}")
                                                }
                                                _ => String::new(),
                                            }}
                                        </td>
                                        <td class="py-2 text-red-700 dark:text-red-400">
                                            {row.errors.join("; ")}
                                        </td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
