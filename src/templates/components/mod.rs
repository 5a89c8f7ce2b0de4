pub mod card;
pub mod error;
pub mod filters;
pub mod pagination;

pub use card::{card, listing_card};
pub use error::error_page;
pub use filters::filter_form;
pub use pagination::pagination_nav;
