use yew::prelude::*;

use crate::hooks::use_announcements;
use crate::utils::time::format_timestamp;

#[function_component]
pub fn AnnouncementsPage() -> Html {
    let announcements = use_announcements();

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"Announcements"}
            </h1>
            {announcements.render("announcements", |announcements, _, _| {
                if announcements.is_empty() {
                    return html! {
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Nothing to announce right now."}
                        </p>
                    };
                }
                html! {
                    <ul class="space-y-6">
                        {for announcements.iter().map(|announcement| html! {
                            <li class="space-y-1">
                                <div class="flex items-baseline justify-between">
                                    <h2 class="font-semibold text-neutral-900 dark:text-white">
                                        {&announcement.title}
                                    </h2>
                                    <span class="text-xs text-neutral-500 dark:text-neutral-400">
                                        {format_timestamp(announcement.published_at)}
                                    </span>
                                </div>
                                <p class="text-sm text-neutral-700 dark:text-neutral-300">
                                    {&announcement.body}
                                </p>
                            </li>
                        })}
                    </ul>
                }
            })}
        </div>
    }
}
