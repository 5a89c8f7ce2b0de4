pub mod browse;
pub mod fallback;
pub mod filter;
pub mod listing;
pub mod merge;
pub mod pagination;

pub use browse::BrowseState;
pub use listing::ListingRecord;
