use payloads::{TagId, requests};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{PaginationControls, PropertyCard};
use crate::hooks::{use_cultural_properties, use_tags};

const PAGE_SIZE: u32 = 12;

#[function_component]
pub fn PropertiesPage() -> Html {
    let filter = use_state(requests::ListCulturalProperties::default);
    let keyword_ref = use_node_ref();

    let tags = use_tags();
    let properties = use_cultural_properties((*filter).clone(), PAGE_SIZE);

    let on_search = {
        let filter = filter.clone();
        let keyword_ref = keyword_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let keyword = keyword_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .filter(|value| !value.is_empty());
            filter.set(requests::ListCulturalProperties {
                keyword,
                ..(*filter).clone()
            });
        })
    };

    let on_tag_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let tag_id = e
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<i64>().ok())
                .map(TagId);
            filter.set(requests::ListCulturalProperties {
                tag_id,
                ..(*filter).clone()
            });
        })
    };

    let input_class = "px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-800 text-sm";

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Cultural properties"}
                </h1>
                <span class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!("{} records", properties.total)}
                </span>
            </div>

            <form onsubmit={on_search} class="flex flex-wrap items-center gap-3">
                <input
                    ref={keyword_ref}
                    type="text"
                    placeholder="Search by name..."
                    class={input_class}
                />
                <select onchange={on_tag_change} class={input_class}>
                    <option value="" selected={filter.tag_id.is_none()}>
                        {"All tags"}
                    </option>
                    {for tags.data.as_ref().into_iter().flatten().map(|tag| {
                        html! {
                            <option
                                value={tag.id.to_string()}
                                selected={filter.tag_id == Some(tag.id)}
                            >
                                {&tag.name}
                            </option>
                        }
                    })}
                </select>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white \
                           text-white dark:text-neutral-900 text-sm font-medium"
                >
                    {"Search"}
                </button>
            </form>

            {match properties.data.as_ref() {
                None if properties.is_initial_loading() => html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Loading cultural properties..."}
                        </p>
                    </div>
                },
                None => html! {
                    {if let Some(error) = &properties.error {
                        html! {
                            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                                        border border-red-200 dark:border-red-800">
                                <p class="text-sm text-red-700 dark:text-red-400">
                                    {format!("Error loading cultural properties: {error}")}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                },
                Some(list) if list.is_empty() => html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"No cultural properties match this filter"}
                        </p>
                    </div>
                },
                Some(list) => html! {
                    <>
                        {if let Some(error) = &properties.error {
                            html! {
                                <p class="text-sm text-red-700 dark:text-red-400">
                                    {format!("Refresh failed: {error}")}
                                </p>
                            }
                        } else {
                            html! {}
                        }}
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                            {for list.iter().map(|property| html! {
                                <PropertyCard property={property.clone()} />
                            })}
                        </div>
                        <PaginationControls
                            page={properties.page}
                            total_pages={properties.total_pages}
                            on_prev={properties.prev_page.clone()}
                            on_next={properties.next_page.clone()}
                            is_loading={properties.is_loading}
                        />
                    </>
                },
            }}
        </div>
    }
}
