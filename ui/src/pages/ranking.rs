use yew::prelude::*;

use crate::components::PaginationControls;
use crate::hooks::use_active_users;

const PAGE_SIZE: u32 = 20;

/// Users ranked by how many cultural properties they have registered.
#[function_component]
pub fn RankingPage() -> Html {
    let ranking = use_active_users(PAGE_SIZE);

    html! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"Top contributors"}
            </h1>

            {match ranking.data.as_ref() {
                None if ranking.is_initial_loading() => html! {
                    <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                        {"Loading ranking..."}
                    </p>
                },
                None => html! {
                    {if let Some(error) = &ranking.error {
                        html! {
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {format!("Error loading ranking: {error}")}
                            </p>
                        }
                    } else {
                        html! {}
                    }}
                },
                Some(users) => html! {
                    <>
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-neutral-500 dark:text-neutral-400 \
                                           border-b border-neutral-200 dark:border-neutral-700">
                                    <th class="py-2 w-12">{"#"}</th>
                                    <th class="py-2">{"User"}</th>
                                    <th class="py-2 text-right">{"Registered"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for users.iter().enumerate().map(|(i, user)| {
                                    let rank = (ranking.page - 1) as u64
                                        * PAGE_SIZE as u64
                                        + i as u64
                                        + 1;
                                    html! {
                                        <tr class="border-b border-neutral-100 dark:border-neutral-800">
                                            <td class="py-2 text-neutral-500">{rank}</td>
                                            <td class="py-2 font-medium">{&user.username}</td>
                                            <td class="py-2 text-right">{user.registered_count}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                        <PaginationControls
                            page={ranking.page}
                            total_pages={ranking.total_pages}
                            on_prev={ranking.prev_page.clone()}
                            on_next={ranking.next_page.clone()}
                            is_loading={ranking.is_loading}
                        />
                    </>
                },
            }}
        </div>
    }
}
