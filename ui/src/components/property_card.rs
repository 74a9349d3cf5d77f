use payloads::CulturalProperty;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property: CulturalProperty,
}

#[function_component]
pub fn PropertyCard(props: &Props) -> Html {
    let property = &props.property;

    html! {
        <Link<Route> to={Route::PropertyDetail { id: property.id }}>
            <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 \
                        overflow-hidden hover:shadow-md transition-shadow bg-white \
                        dark:bg-neutral-800 h-full">
                {if let Some(url) = property.image_urls.first() {
                    html! {
                        <img
                            src={url.clone()}
                            alt={property.name.clone()}
                            class="w-full h-40 object-cover"
                        />
                    }
                } else {
                    html! {
                        <div class="w-full h-40 bg-neutral-100 dark:bg-neutral-700 \
                                    flex items-center justify-center text-neutral-400">
                            {"No image"}
                        </div>
                    }
                }}
                <div class="p-4 space-y-2">
                    <h3 class="font-semibold text-neutral-900 dark:text-white">
                        {&property.name}
                    </h3>
                    {if let Some(address) = &property.address {
                        html! {
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {address}
                            </p>
                        }
                    } else {
                        html! {}
                    }}
                    <div class="flex flex-wrap gap-1">
                        {for property.tags.iter().map(|tag| html! {
                            <span class="px-2 py-0.5 text-xs rounded-full \
                                         bg-neutral-100 dark:bg-neutral-700 \
                                         text-neutral-700 dark:text-neutral-300">
                                {&tag.name}
                            </span>
                        })}
                        {if !property.movies.is_empty() {
                            html! {
                                <span class="px-2 py-0.5 text-xs rounded-full \
                                             bg-blue-50 dark:bg-blue-900/30 \
                                             text-blue-700 dark:text-blue-300">
                                    {"3D model"}
                                </span>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </div>
        </Link<Route>>
    }
}
