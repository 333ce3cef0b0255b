use std::time::Duration;

use url::Url;

/// Public search endpoint of the Arch Linux package repositories.
pub const SEARCH_ENDPOINT: &str = "https://archlinux.org/packages/search/json/";
pub const AUR_ENDPOINT: &str = "https://aur.archlinux.org/rpc/";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    /// AUR RPC endpoint, only queried when the AUR fallback is enabled.
    pub aur_endpoint: Url,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(SEARCH_ENDPOINT).expect("invalid search endpoint"),
            aur_endpoint: Url::parse(AUR_ENDPOINT).expect("invalid AUR endpoint"),
            timeout: None,
        }
    }
}
