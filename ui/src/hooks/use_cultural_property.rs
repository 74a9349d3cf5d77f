use payloads::{CulturalProperty, CulturalPropertyId};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, QueryOptions, use_query};

/// Hook to fetch a single cultural property by id, cached per record.
#[hook]
pub fn use_cultural_property(
    id: CulturalPropertyId,
) -> FetchHookReturn<CulturalProperty> {
    use_query(
        format!("cultural_property:{id}"),
        QueryOptions::default(),
        move || async move {
            let api_client = get_api_client();
            api_client
                .find_cultural_property(id)
                .await
                .map_err(|e| e.to_string())
        },
    )
}
