use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use jiff::SignedDuration;
use yew::prelude::*;

use super::FetchState;
use crate::cache::{DEFAULT_CACHE_TIME, QueryCache};

/// Configuration for [`use_query`].
#[derive(Clone)]
pub struct QueryOptions {
    /// When false, the hook stays idle and performs no fetch. A later flip
    /// to true triggers the usual cache-check-then-fetch sequence.
    pub enabled: bool,
    /// How long a cached value for this key is considered fresh.
    pub cache_time: SignedDuration,
    /// Invoked once per completed attempt, after state is updated.
    pub on_success: Option<Callback<()>>,
    pub on_error: Option<Callback<String>>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_time: DEFAULT_CACHE_TIME,
            on_success: None,
            on_error: None,
        }
    }
}

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// Handles the common pattern of:
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: call the render function with (data, is_loading, error),
    ///   so a failed refetch can surface the error while the previous data
    ///   stays visible.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => {
                render_fn(data, self.is_loading, self.error.as_ref())
            }
        }
    }
}

type QueryFetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, String>>>;

/// Resolution of one triggered attempt, before any network call.
#[derive(Debug, PartialEq)]
enum Attempt<T> {
    /// Adopt a fresh cached value without touching the network.
    Cached(T),
    /// Call the fetcher.
    Fetch,
}

/// Decide whether an attempt is served from cache. A bypass (refetch)
/// never adopts a cached value, so the network is always hit.
fn resolve_attempt<T: Clone + 'static>(
    cache: &QueryCache,
    key: &str,
    max_age: SignedDuration,
    bypass_cache: bool,
) -> Attempt<T> {
    if bypass_cache {
        return Attempt::Fetch;
    }
    match cache.get_fresh(key, max_age) {
        Some(value) => Attempt::Cached(value),
        None => Attempt::Fetch,
    }
}

/// State written back when an attempt completes, whether served from cache
/// or from the network: `(data, error, is_loading)`. `data` is `None` when
/// the existing value must stay in place (a failure, or a commit rejected
/// in favor of a newer fetch). Loading always ends with the attempt.
fn settle_attempt<T>(
    result: Result<T, String>,
    commit_accepted: bool,
) -> (Option<FetchState<T>>, Option<String>, bool) {
    match result {
        Ok(value) if commit_accepted => {
            (Some(FetchState::Fetched(value)), None, false)
        }
        Ok(_) => (None, None, false),
        Err(e) => (None, Some(e), false),
    }
}

/// Latest closures, swapped in on every render so a triggered fetch always
/// sees the current fetcher and callbacks without resetting hook state.
struct Latest<T> {
    fetch: QueryFetcher<T>,
    on_success: Option<Callback<()>>,
    on_error: Option<Callback<String>>,
}

/// Cache-aware fetch hook.
///
/// Wraps an arbitrary fetcher with loading/error/data state and a keyed
/// freshness check against the [`QueryCache`] provided by app context:
/// a fresh cache entry is adopted with no network call, anything else
/// triggers the fetcher. Successful results are stored back under `key`.
/// `refetch` always bypasses the freshness check.
///
/// In-flight fetches are never cancelled when `key` changes or the caller
/// unmounts; a stale resolution is only prevented from overwriting a newer
/// committed result by the cache's per-key sequence numbers.
///
/// # Example
///
/// ```rust
/// # use yew::prelude::*;
/// # use payloads::Tag;
/// # use ui::get_api_client;
/// # use ui::hooks::{use_query, FetchHookReturn, QueryOptions};
/// #[hook]
/// pub fn use_tags() -> FetchHookReturn<Vec<Tag>> {
///     use_query("tags".to_string(), QueryOptions::default(), || async {
///         let api_client = get_api_client();
///         api_client.list_tags().await.map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_query<T, F, Fut>(
    key: String,
    options: QueryOptions,
    fetch_fn: F,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let cache = use_context::<QueryCache>()
        .expect("use_query requires a QueryCache context");
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let latest = use_mut_ref(|| None::<Latest<T>>);
    {
        let fetch_fn = Rc::new(fetch_fn);
        *latest.borrow_mut() = Some(Latest {
            fetch: Rc::new(move || fetch_fn().boxed_local()),
            on_success: options.on_success.clone(),
            on_error: options.on_error.clone(),
        });
    }

    let run_fetch = {
        let cache = cache.clone();
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let latest = latest.clone();

        use_callback(
            (key, options.cache_time),
            move |bypass_cache: bool, (key, cache_time)| {
                match resolve_attempt::<T>(&cache, key, *cache_time, bypass_cache)
                {
                    Attempt::Cached(value) => {
                        // A hit settles like an accepted fetch: fresh data,
                        // no stale error from a previously rendered key.
                        let (next_data, next_error, next_loading) =
                            settle_attempt(Ok(value), true);
                        if let Some(next_data) = next_data {
                            data.set(next_data);
                        }
                        error.set(next_error);
                        is_loading.set(next_loading);
                    }
                    Attempt::Fetch => {
                        let seq = cache.begin_fetch(key);
                        let key = key.clone();
                        let cache = cache.clone();
                        let data = data.clone();
                        let error = error.clone();
                        let is_loading = is_loading.clone();
                        let latest = latest.clone();

                        yew::platform::spawn_local(async move {
                            is_loading.set(true);
                            error.set(None);

                            let (fetch, on_success, on_error) = {
                                let latest = latest.borrow();
                                let latest = latest
                                    .as_ref()
                                    .expect("fetcher installed on first render");
                                (
                                    latest.fetch.clone(),
                                    latest.on_success.clone(),
                                    latest.on_error.clone(),
                                )
                            };

                            let result = fetch().await;
                            // A rejected commit means a newer fetch already
                            // resolved; its state stays too.
                            let commit_accepted = match &result {
                                Ok(value) => {
                                    cache.commit(&key, seq, value.clone())
                                }
                                Err(_) => false,
                            };
                            let failure = result.as_ref().err().cloned();

                            let (next_data, next_error, next_loading) =
                                settle_attempt(result, commit_accepted);
                            if let Some(next_data) = next_data {
                                data.set(next_data);
                            }
                            error.set(next_error);
                            is_loading.set(next_loading);

                            match failure {
                                None => {
                                    if let Some(cb) = on_success {
                                        cb.emit(());
                                    }
                                }
                                Some(e) => {
                                    if let Some(cb) = on_error {
                                        cb.emit(e);
                                    }
                                }
                            }
                        });
                    }
                }
            },
        )
    };

    // Fetch on mount and whenever key/cache_time/enabled change. A fetch
    // already in flight for a previous key is not cancelled; the cache's
    // sequence numbers keep its late resolution from winning.
    {
        let run_fetch = run_fetch.clone();
        use_effect_with(
            (run_fetch.clone(), options.enabled),
            move |(run_fetch, enabled)| {
                if *enabled {
                    run_fetch.emit(false);
                }
            },
        );
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| run_fetch.emit(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_the_query_with_a_five_minute_window() {
        let options = QueryOptions::default();
        assert!(options.enabled);
        assert_eq!(options.cache_time, SignedDuration::from_mins(5));
        assert!(options.on_success.is_none());
        assert!(options.on_error.is_none());
    }

    #[test]
    fn refetch_bypasses_a_fresh_cache_entry() {
        let cache = QueryCache::new();
        let seq = cache.begin_fetch("tags");
        cache.commit("tags", seq, "cached".to_string());

        // A plain attempt adopts the fresh entry; a refetch ignores it and
        // goes to the network.
        assert_eq!(
            resolve_attempt::<String>(
                &cache,
                "tags",
                DEFAULT_CACHE_TIME,
                false
            ),
            Attempt::Cached("cached".to_string())
        );
        assert_eq!(
            resolve_attempt::<String>(
                &cache,
                "tags",
                DEFAULT_CACHE_TIME,
                true
            ),
            Attempt::Fetch
        );
    }

    #[test]
    fn failed_attempt_keeps_previous_data_and_surfaces_the_error() {
        let (data, error, is_loading) = settle_attempt::<Vec<i32>>(
            Err("boom".to_string()),
            false,
        );
        assert_eq!(data, None);
        assert_eq!(error, Some("boom".to_string()));
        assert!(!is_loading);
    }

    #[test]
    fn adopted_value_clears_any_previous_error() {
        let (data, error, is_loading) =
            settle_attempt(Ok(vec![1, 2, 3]), true);
        assert_eq!(data, Some(FetchState::Fetched(vec![1, 2, 3])));
        assert_eq!(error, None);
        assert!(!is_loading);
    }

    #[test]
    fn rejected_commit_leaves_newer_state_in_place() {
        let (data, error, is_loading) =
            settle_attempt(Ok(vec![1, 2, 3]), false);
        assert_eq!(data, None);
        assert_eq!(error, None);
        assert!(!is_loading);
    }
}
