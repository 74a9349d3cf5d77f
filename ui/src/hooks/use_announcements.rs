use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, QueryOptions, use_query};

/// Hook to fetch site announcements, newest first as served by the backend.
#[hook]
pub fn use_announcements() -> FetchHookReturn<Vec<responses::Announcement>> {
    use_query(
        "announcements".to_string(),
        QueryOptions::default(),
        || async {
            let api_client = get_api_client();
            api_client
                .list_announcements()
                .await
                .map_err(|e| e.to_string())
        },
    )
}
