use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current page (1-indexed)
    pub page: u32,
    /// Total page count from the latest fetch
    pub total_pages: u32,
    /// Callback for the previous-page button
    pub on_prev: Callback<()>,
    /// Callback for the next-page button
    pub on_next: Callback<()>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props { page, total_pages, is_loading, .. } = *props;

    // A single page needs no controls
    if total_pages <= 1 {
        return html! {};
    }

    let prev_disabled = page <= 1 || is_loading;
    let next_disabled = page >= total_pages || is_loading;

    let on_previous = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={on_previous}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Previous"}
            </button>

            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Page {} of {}", page, total_pages)}
            </span>

            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
