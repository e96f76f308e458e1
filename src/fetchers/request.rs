use super::Fetcher;
use crate::config::ScrapeConfig;
use crate::error::LookupError;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for RequestFetcher {
    fn fetch(&self, url: &str) -> Result<String, LookupError> {
        debug!("GET {}", url);
        let html = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_body() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/spells")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>ok</body></html>")
            .create();

        let fetcher = RequestFetcher::new(&ScrapeConfig::default()).unwrap();
        let body = fetcher.fetch(&format!("{}/spells", server.url())).unwrap();
        assert!(body.contains("ok"));
    }

    #[test]
    fn test_non_success_status_is_fetch_error() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/missing").with_status(404).create();

        let fetcher = RequestFetcher::new(&ScrapeConfig::default()).unwrap();
        let result = fetcher.fetch(&format!("{}/missing", server.url()));
        assert!(matches!(result, Err(LookupError::FetchError(_))));
    }
}
