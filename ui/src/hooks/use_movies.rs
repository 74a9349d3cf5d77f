use payloads::{CulturalPropertyId, Movie, requests};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, QueryOptions, use_query};

/// Hook to fetch the movie (3D model) entries linked to a cultural property.
#[hook]
pub fn use_movies(
    cultural_property_id: CulturalPropertyId,
) -> FetchHookReturn<Vec<Movie>> {
    use_query(
        format!("movies:{cultural_property_id}"),
        QueryOptions::default(),
        move || async move {
            let api_client = get_api_client();
            let query = requests::ListMovies {
                cultural_property_id: Some(cultural_property_id),
            };
            api_client.list_movies(&query).await.map_err(|e| e.to_string())
        },
    )
}
