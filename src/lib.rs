pub mod commands;
pub mod config;
pub mod fetch;
pub mod package;

pub use config::Config;
pub use fetch::{FetchError, Fetcher, Lookup};
pub use package::PackageRecord;
