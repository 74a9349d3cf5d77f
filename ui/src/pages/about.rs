use yew::prelude::*;

#[function_component]
pub fn AboutPage() -> Html {
    html! {
        <div class="max-w-3xl mx-auto space-y-4">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"About Cultural Atlas"}
            </h1>
            <p class="text-neutral-700 dark:text-neutral-300">
                {"Cultural Atlas is a community archive of cultural \
                  properties: shrines, temples, bridges, monuments, and \
                  other pieces of local heritage. Each record carries its \
                  location, photographs, and, where contributors have \
                  scanned one, a 3D model you can view in AR."}
            </p>
            <p class="text-neutral-700 dark:text-neutral-300">
                {"Anyone can browse. Signing up lets you register new \
                  properties, attach models, and bulk-import records from \
                  CSV. The most active contributors appear in the ranking."}
            </p>
        </div>
    }
}
