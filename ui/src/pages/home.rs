use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <div class="text-center space-y-6 py-16">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">
                {"Cultural Atlas"}
            </h1>
            <p class="max-w-2xl mx-auto text-lg text-neutral-600 dark:text-neutral-400">
                {"Browse cultural properties around you, explore their \
                  photos and 3D models, and help grow the archive."}
            </p>
            <div class="flex justify-center space-x-4">
                <Link<Route>
                    to={Route::Properties}
                    classes="px-6 py-3 rounded-md bg-neutral-900 dark:bg-white \
                             text-white dark:text-neutral-900 font-medium \
                             hover:bg-neutral-700 dark:hover:bg-neutral-200 \
                             transition-colors"
                >
                    {"Browse properties"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Ranking}
                    classes="px-6 py-3 rounded-md border border-neutral-300 \
                             dark:border-neutral-600 font-medium \
                             text-neutral-700 dark:text-neutral-300 \
                             hover:bg-neutral-50 dark:hover:bg-neutral-800 \
                             transition-colors"
                >
                    {"Top contributors"}
                </Link<Route>>
            </div>
        </div>
    }
}
