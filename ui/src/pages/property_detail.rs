use payloads::CulturalPropertyId;
use yew::prelude::*;

use crate::hooks::{use_cultural_property, use_movies};
use crate::utils::time::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: CulturalPropertyId,
}

#[function_component]
pub fn PropertyDetailPage(props: &Props) -> Html {
    let property = use_cultural_property(props.id);
    let movies = use_movies(props.id);

    property.render("cultural property", |property, is_loading, error| {
        html! {
            <div class="space-y-6">
                {if is_loading {
                    html! {
                        <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
                    }
                } else {
                    html! {}
                }}
                {if let Some(error) = error {
                    html! {
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {format!("Refresh failed: {error}")}
                        </p>
                    }
                } else {
                    html! {}
                }}

                <div class="space-y-1">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">
                        {&property.name}
                    </h1>
                    {if let Some(kana) = &property.name_kana {
                        html! {
                            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                {kana}
                            </p>
                        }
                    } else {
                        html! {}
                    }}
                    <div class="flex flex-wrap gap-1 pt-1">
                        {for property.tags.iter().map(|tag| html! {
                            <span class="px-2 py-0.5 text-xs rounded-full \
                                         bg-neutral-100 dark:bg-neutral-700 \
                                         text-neutral-700 dark:text-neutral-300">
                                {&tag.name}
                            </span>
                        })}
                    </div>
                </div>

                {if let Some(description) = &property.description {
                    html! {
                        <p class="text-neutral-700 dark:text-neutral-300 max-w-3xl">
                            {description}
                        </p>
                    }
                } else {
                    html! {}
                }}

                <div class="text-sm text-neutral-600 dark:text-neutral-400 space-y-1">
                    {if let Some(address) = &property.address {
                        html! { <p>{address}</p> }
                    } else {
                        html! {}
                    }}
                    <p>
                        {format!(
                            "{:.5}, {:.5}",
                            property.latitude, property.longitude
                        )}
                    </p>
                    <p>{format!("Registered {}", format_timestamp(property.created_at))}</p>
                </div>

                {if !property.image_urls.is_empty() {
                    html! {
                        <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                            {for property.image_urls.iter().map(|url| html! {
                                <img
                                    src={url.clone()}
                                    alt={property.name.clone()}
                                    class="w-full h-48 object-cover rounded-md"
                                />
                            })}
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div class="space-y-3">
                    <h2 class="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"3D models"}
                    </h2>
                    {movies.render("3D models", |movies, _, _| {
                        if movies.is_empty() {
                            return html! {
                                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                    {"No 3D models have been linked yet."}
                                </p>
                            };
                        }
                        html! {
                            <ul class="space-y-2">
                                {for movies.iter().map(|movie| html! {
                                    <li class="flex items-center space-x-3">
                                        {if let Some(thumbnail) = &movie.thumbnail_url {
                                            html! {
                                                <img
                                                    src={thumbnail.clone()}
                                                    alt={movie.title.clone()}
                                                    class="w-16 h-12 object-cover rounded"
                                                />
                                            }
                                        } else {
                                            html! {}
                                        }}
                                        // The viewer itself is an external
                                        // service; we only link out to it.
                                        <a
                                            href={movie.model_url.clone()}
                                            target="_blank"
                                            class="text-sm font-medium underline \
                                                   text-neutral-900 dark:text-neutral-100"
                                        >
                                            {&movie.title}
                                        </a>
                                    </li>
                                })}
                            </ul>
                        }
                    })}
                </div>
            </div>
        }
    })
}
