use std::time::Duration;

use clap::{builder::NonEmptyStringValueParser, ArgAction, Parser};
use pkginfo::{
    config::{AUR_ENDPOINT, SEARCH_ENDPOINT},
    Config,
};
use url::Url;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Fetch information about a package in the Arch Linux repositories."
)]
pub struct Cli {
    /// Name of the package to fetch information for
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub package_name: String,

    /// Search endpoint to query
    #[arg(long, env = "PKGINFO_ENDPOINT", default_value = SEARCH_ENDPOINT, hide_default_value = true)]
    pub endpoint: Url,

    /// Also query the AUR when the official repositories have no match
    #[arg(long)]
    pub aur: bool,

    /// AUR RPC endpoint to query
    #[arg(long, env = "PKGINFO_AUR_ENDPOINT", default_value = AUR_ENDPOINT, hide_default_value = true)]
    pub aur_endpoint: Url,

    /// Request timeout in seconds
    #[arg(long, env = "PKGINFO_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            aur_endpoint: self.aur_endpoint.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
