use jiff::SignedDuration;
use payloads::Tag;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, QueryOptions, use_query};

/// Hook to fetch the tag list. Tags change rarely, so they get a longer
/// freshness window than the default.
#[hook]
pub fn use_tags() -> FetchHookReturn<Vec<Tag>> {
    let options = QueryOptions {
        cache_time: SignedDuration::from_mins(15),
        ..Default::default()
    };
    use_query("tags".to_string(), options, || async {
        let api_client = get_api_client();
        api_client.list_tags().await.map_err(|e| e.to_string())
    })
}
