pub mod use_active_users;
pub mod use_announcements;
pub mod use_authentication;
pub mod use_cultural_properties;
pub mod use_cultural_property;
pub mod use_movies;
pub mod use_paginated_query;
pub mod use_query;
pub mod use_tags;

pub use use_active_users::use_active_users;
pub use use_announcements::use_announcements;
pub use use_authentication::use_authentication;
pub use use_cultural_properties::use_cultural_properties;
pub use use_cultural_property::use_cultural_property;
pub use use_movies::use_movies;
pub use use_paginated_query::{PaginatedHookReturn, use_paginated_query};
pub use use_query::{FetchHookReturn, QueryOptions, use_query};
pub use use_tags::use_tags;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Clone, PartialEq, Debug, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
