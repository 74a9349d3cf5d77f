use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{PaginatedHookReturn, use_paginated_query};

/// Hook to fetch one page of the active-user ranking.
#[hook]
pub fn use_active_users(
    limit: u32,
) -> PaginatedHookReturn<responses::ActiveUser> {
    use_paginated_query((), limit, |page, limit| async move {
        let api_client = get_api_client();
        api_client
            .active_users_page(page, limit)
            .await
            .map_err(|e| e.to_string())
    })
}
