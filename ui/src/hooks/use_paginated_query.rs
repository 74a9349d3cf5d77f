use std::future::Future;
use std::rc::Rc;

use payloads::Page;
use yew::prelude::*;

use super::FetchState;

/// Pagination arithmetic, kept separate from the hook so it can be tested
/// without a DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow {
    /// Current page, 1-based.
    pub page: u32,
    pub limit: u32,
    /// Total record count reported by the most recent fetch.
    pub total: u64,
}

impl PageWindow {
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit as u64) as u32
    }

    /// Clamp a navigation target into `[1, total_pages]`. With no records
    /// yet there is still always a page 1.
    pub fn clamp(&self, target: u32) -> u32 {
        target.clamp(1, self.total_pages().max(1))
    }
}

/// Return type of [`use_paginated_query`]: fetch state plus page navigation.
pub struct PaginatedHookReturn<T> {
    pub data: FetchState<Vec<T>>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Current page, 1-based.
    pub page: u32,
    /// Total record count from the latest successful fetch.
    pub total: u64,
    pub total_pages: u32,
    pub refetch: Callback<()>,
    pub next_page: Callback<()>,
    pub prev_page: Callback<()>,
    pub go_to_page: Callback<u32>,
}

impl<T> PaginatedHookReturn<T> {
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }
}

/// Page-oriented fetch hook.
///
/// Unlike [`super::use_query`] there is no caching layer: every change of
/// `deps`, page, or limit calls the fetcher with `(page, limit)`. The total
/// page count is re-derived from the `total` of each successful fetch, and
/// all navigation clamps into `[1, total_pages]`. A failed fetch keeps the
/// last successful page's data and sets `error`.
#[hook]
pub fn use_paginated_query<T, D, F, Fut>(
    deps: D,
    limit: u32,
    fetch_fn: F,
) -> PaginatedHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(u32, u32) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let page = use_state(|| 1u32);
    let total = use_state(|| 0u64);

    let fetch_fn = Rc::new(fetch_fn);

    let run_fetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let total = total.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback(
            (deps, *page, limit),
            move |_: (), (_, page_num, limit)| {
                let data = data.clone();
                let error = error.clone();
                let is_loading = is_loading.clone();
                let total = total.clone();
                let fetch_fn = fetch_fn.clone();
                let (page_num, limit) = (*page_num, *limit);

                yew::platform::spawn_local(async move {
                    is_loading.set(true);
                    error.set(None);

                    match fetch_fn(page_num, limit).await {
                        Ok(result) => {
                            data.set(FetchState::Fetched(result.data));
                            total.set(result.total);
                            error.set(None);
                        }
                        Err(e) => {
                            // Last successful page stays visible.
                            error.set(Some(e));
                        }
                    }

                    is_loading.set(false);
                });
            },
        )
    };

    // Fetch on mount and whenever deps/page/limit change.
    {
        let run_fetch = run_fetch.clone();
        use_effect_with(run_fetch.clone(), move |_| {
            run_fetch.emit(());
        });
    }

    let window = PageWindow { page: *page, limit, total: *total };

    let go_to_page = {
        let page = page.clone();
        Callback::from(move |target: u32| {
            let clamped = window.clamp(target);
            if clamped != window.page {
                page.set(clamped);
            }
        })
    };

    let next_page = {
        let go_to_page = go_to_page.clone();
        Callback::from(move |_| go_to_page.emit(window.page + 1))
    };

    let prev_page = {
        let go_to_page = go_to_page.clone();
        Callback::from(move |_| go_to_page.emit(window.page.saturating_sub(1)))
    };

    PaginatedHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        page: window.page,
        total: window.total,
        total_pages: window.total_pages(),
        refetch: Callback::from(move |_| run_fetch.emit(())),
        next_page,
        prev_page,
        go_to_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let window = PageWindow { page: 1, limit: 12, total: 25 };
        assert_eq!(window.total_pages(), 3);

        let window = PageWindow { page: 1, limit: 12, total: 24 };
        assert_eq!(window.total_pages(), 2);

        let window = PageWindow { page: 1, limit: 12, total: 0 };
        assert_eq!(window.total_pages(), 0);
    }

    #[test]
    fn navigation_clamps_to_the_nearest_bound() {
        let window = PageWindow { page: 3, limit: 12, total: 25 };
        assert_eq!(window.clamp(5), 3);
        assert_eq!(window.clamp(0), 1);
        assert_eq!(window.clamp(2), 2);
    }

    #[test]
    fn next_page_at_the_last_page_stays_put() {
        let window = PageWindow { page: 3, limit: 12, total: 25 };
        assert_eq!(window.clamp(window.page + 1), window.page);
    }

    #[test]
    fn empty_result_set_still_has_a_first_page() {
        let window = PageWindow { page: 1, limit: 12, total: 0 };
        assert_eq!(window.clamp(7), 1);
    }

    #[test]
    fn zero_limit_does_not_divide_by_zero() {
        let window = PageWindow { page: 1, limit: 0, total: 25 };
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.clamp(3), 1);
    }
}
