pub mod browse;
pub mod home;
pub mod profile;

pub use browse::{browse_page, BrowseVm};
pub use home::home_page;
pub use profile::profile_page;
