pub mod layout;
pub mod pagination_controls;
pub mod property_card;

pub use pagination_controls::PaginationControls;
pub use property_card::PropertyCard;
