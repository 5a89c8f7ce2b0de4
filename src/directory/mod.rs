pub mod client;
mod fetch_error;
pub mod models;
pub mod store;

pub use client::ApiClient;
pub use fetch_error::FetchError;
pub use store::{spawn_initial_load, DataSource, Directory};
