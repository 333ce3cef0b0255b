use std::{io::Write, time::Duration};

use anyhow::Result;
use indicatif::ProgressBar;
use tracing::info;

use crate::{
    fetch::{FetchError, Fetcher, Lookup},
    package::{aur_not_found_message, not_found_message},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

/// Prints the record for `name`, falling back to the AUR when `search_aur` is set
/// and the official repositories have no match.
pub async fn info<W: Write>(
    fetcher: &Fetcher,
    name: &str,
    search_aur: bool,
    out: &mut W,
) -> Result<Outcome> {
    info!("Retrieving info for package: {}", name);

    let spinner = ProgressBar::new_spinner().with_message(format!("Searching for {name}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let lookup = async {
        match fetcher.fetch(name).await? {
            Lookup::NotFound if search_aur => {
                info!("{} is not in the official repositories, trying the AUR", name);
                spinner.set_message(format!("Searching the AUR for {name}..."));
                fetcher.fetch_aur(name).await
            }
            lookup => Ok::<_, FetchError>(lookup),
        }
    }
    .await;
    spinner.finish_and_clear();

    match lookup? {
        Lookup::Found(record) => {
            writeln!(out, "{record}")?;
            Ok(Outcome::Found)
        }
        Lookup::NotFound if search_aur => {
            writeln!(out, "{}", aur_not_found_message(name))?;
            Ok(Outcome::NotFound)
        }
        Lookup::NotFound => {
            writeln!(out, "{}", not_found_message(name))?;
            Ok(Outcome::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use url::Url;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::config::Config;

    const SEARCH_PATH: &str = "/search/";
    const AUR_PATH: &str = "/rpc/";

    fn bash() -> Value {
        json!({ "results": [{
            "pkgname": "bash",
            "pkgdesc": "The GNU Bourne Again shell",
            "repo": "core",
            "pkgver": "5.2.026-1",
            "url": "https://www.gnu.org/software/bash/",
            "licenses": ["GPL3"],
            "depends": ["glibc", "readline"]
        }]})
    }

    fn empty() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "results": [] }))
    }

    async fn fetcher_with(
        official: ResponseTemplate,
        aur: Option<ResponseTemplate>,
    ) -> (MockServer, Fetcher) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("name", "bash"))
            .respond_with(official)
            .expect(1)
            .mount(&server)
            .await;

        let aur_calls: u64 = if aur.is_some() { 1 } else { 0 };
        Mock::given(method("GET"))
            .and(path(AUR_PATH))
            .and(query_param("arg[]", "bash"))
            .respond_with(aur.unwrap_or_else(empty))
            .expect(aur_calls)
            .mount(&server)
            .await;

        let config = Config {
            endpoint: Url::parse(&format!("{}{SEARCH_PATH}", server.uri())).unwrap(),
            aur_endpoint: Url::parse(&format!("{}{AUR_PATH}", server.uri())).unwrap(),
            timeout: Some(Duration::from_secs(5)),
        };
        let fetcher = Fetcher::new(&config).unwrap();
        (server, fetcher)
    }

    #[tokio::test]
    async fn prints_record() {
        let (_server, fetcher) =
            fetcher_with(ResponseTemplate::new(200).set_body_json(bash()), None).await;
        let mut out = Vec::new();

        let outcome = info(&fetcher, "bash", false, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Found);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Package Name: bash\n\
             Description: The GNU Bourne Again shell\n\
             Repository: core\n\
             Version: 5.2.026-1\n\
             URL: https://www.gnu.org/software/bash/\n\
             License: GPL3\n\
             Dependencies: glibc, readline\n"
        );
    }

    #[tokio::test]
    async fn prints_not_found() {
        let (_server, fetcher) = fetcher_with(empty(), None).await;
        let mut out = Vec::new();

        let outcome = info(&fetcher, "bash", false, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Package 'bash' not found in official repositories.\n"
        );
    }

    #[tokio::test]
    async fn server_errors_propagate_without_output() {
        let (_server, fetcher) = fetcher_with(ResponseTemplate::new(500), None).await;
        let mut out = Vec::new();

        let err = info(&fetcher, "bash", true, &mut out).await.unwrap_err();

        assert!(out.is_empty());
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::ServerStatus(status)) if status.as_u16() == 500
        ));
        assert_eq!(format!("{err:#}"), "repository service returned HTTP 500");
    }

    #[tokio::test]
    async fn official_match_skips_aur() {
        let (_server, fetcher) =
            fetcher_with(ResponseTemplate::new(200).set_body_json(bash()), None).await;
        let mut out = Vec::new();

        let outcome = info(&fetcher, "bash", true, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Found);
        assert!(String::from_utf8(out).unwrap().contains("Repository: core\n"));
    }

    #[tokio::test]
    async fn falls_back_to_aur() {
        let aur = ResponseTemplate::new(200).set_body_json(json!({ "results": [{
            "Name": "bash",
            "Description": "Patched shell",
            "Version": "5.3-1",
            "URL": "https://example.org/bash",
            "License": ["GPL-3.0-or-later"],
            "Depends": ["glibc"]
        }]}));
        let (_server, fetcher) = fetcher_with(empty(), Some(aur)).await;
        let mut out = Vec::new();

        let outcome = info(&fetcher, "bash", true, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Found);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Package Name: bash\n\
             Description: Patched shell\n\
             Repository: AUR\n\
             Version: 5.3-1\n\
             URL: https://example.org/bash\n\
             License: GPL-3.0-or-later\n\
             Dependencies: glibc\n"
        );
    }

    #[tokio::test]
    async fn missing_everywhere_mentions_aur() {
        let (_server, fetcher) = fetcher_with(empty(), Some(empty())).await;
        let mut out = Vec::new();

        let outcome = info(&fetcher, "bash", true, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Package 'bash' not found in either official repositories or AUR.\n"
        );
    }
}
