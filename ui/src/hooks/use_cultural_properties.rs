use payloads::{CulturalProperty, requests};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{PaginatedHookReturn, use_paginated_query};

/// Hook to fetch one page of cultural properties matching a filter.
///
/// Changing the filter, page, or limit always hits the network; the list
/// endpoint is not cached so edits and imports show up immediately.
#[hook]
pub fn use_cultural_properties(
    filter: requests::ListCulturalProperties,
    limit: u32,
) -> PaginatedHookReturn<CulturalProperty> {
    use_paginated_query(filter.clone(), limit, move |page, limit| {
        let filter = filter.clone();
        async move {
            let api_client = get_api_client();
            api_client
                .cultural_properties_page(page, limit, &filter)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
