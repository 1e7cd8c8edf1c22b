//! Launch Library 2 client
//!
//! The data source behind both views. Every failure (transport, non-success
//! status, undecodable body) is logged here and collapsed into `None`; callers
//! only ever learn that data is unavailable.

use std::time::Duration;

use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result, WrapErr};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    domain::launch::{LaunchDetail, LaunchSearchResults, LaunchSummary},
    infrastructure::config::ApiConfig,
};

#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Launches matching `query`, or `None` when no usable data came back
    async fn search(&self, query: &str) -> Option<Vec<LaunchSummary>>;

    /// One launch by id, or `None` when no usable data came back
    async fn get_launch(&self, id: &str) -> Option<LaunchDetail>;
}

pub struct LaunchLibraryClient {
    http: Client,
    base_url: Url,
    list_mode: bool,
    simulated_latency: Option<Duration>,
}

impl LaunchLibraryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to create HTTP client")?;

        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .wrap_err_with(|| format!("Invalid API base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(eyre!("API base URL cannot be a base: {base_url}"));
        }

        Ok(Self {
            http,
            base_url,
            list_mode: config.list_mode,
            simulated_latency: (config.simulated_latency_ms > 0)
                .then(|| Duration::from_millis(config.simulated_latency_ms)),
        })
    }

    /// `<base>/launch/?search=<query>&mode=list`
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.endpoint(&["launch", ""])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("search", query);
            if self.list_mode {
                pairs.append_pair("mode", "list");
            }
        }
        Ok(url)
    }

    /// `<base>/launch/<id>/`
    pub fn detail_url(&self, id: &str) -> Result<Url> {
        self.endpoint(&["launch", id, ""])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| eyre!("API base URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }

        let response = self
            .http
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .wrap_err_with(|| format!("Failed to fetch {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(eyre!("Launch Library API returned {status} for {url}"));
        }

        response
            .json()
            .await
            .wrap_err_with(|| format!("Failed to parse response from {url}"))
    }

    async fn fetch_search(&self, query: &str) -> Result<LaunchSearchResults> {
        let url = self.search_url(query)?;
        self.get_json(url).await
    }

    async fn fetch_launch(&self, id: &str) -> Result<LaunchDetail> {
        let url = self.detail_url(id)?;
        self.get_json(url).await
    }
}

#[async_trait]
impl LaunchSource for LaunchLibraryClient {
    async fn search(&self, query: &str) -> Option<Vec<LaunchSummary>> {
        match self.fetch_search(query).await {
            Ok(found) => {
                tracing::info!(query, count = found.results.len(), "search completed");
                Some(found.results)
            }
            Err(e) => {
                tracing::error!(query, "search failed: {e:?}");
                None
            }
        }
    }

    async fn get_launch(&self, id: &str) -> Option<LaunchDetail> {
        match self.fetch_launch(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                tracing::error!(id, "launch lookup failed: {e:?}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Answer every connection with `status` and `body`; returns the base URL.
    async fn serve(status: &'static str, body: &'static str) -> Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        Ok(format!("http://{addr}/2.2.0/"))
    }

    async fn local_client(status: &'static str, body: &'static str) -> Result<LaunchLibraryClient> {
        let base_url = serve(status, body).await?;
        LaunchLibraryClient::new(&ApiConfig {
            base_url,
            timeout_secs: 5,
            ..Default::default()
        })
    }

    fn client(base_url: &str, list_mode: bool) -> Result<LaunchLibraryClient> {
        LaunchLibraryClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            list_mode,
            ..Default::default()
        })
    }

    #[test]
    fn test_search_url() -> Result<()> {
        let client = client("https://lldev.thespacedevs.com/2.2.0/", true)?;

        let url = client.search_url("falcon 9")?;

        assert_eq!(
            url.as_str(),
            "https://lldev.thespacedevs.com/2.2.0/launch/?search=falcon+9&mode=list"
        );
        Ok(())
    }

    #[test]
    fn test_search_url_without_list_mode() -> Result<()> {
        let client = client("https://lldev.thespacedevs.com/2.2.0/", false)?;

        let url = client.search_url("electron")?;

        assert_eq!(
            url.as_str(),
            "https://lldev.thespacedevs.com/2.2.0/launch/?search=electron"
        );
        Ok(())
    }

    #[test]
    fn test_detail_url_adds_trailing_slash_and_encodes_id() -> Result<()> {
        let client = client("https://ll.thespacedevs.com/2.2.0", true)?;

        assert_eq!(
            client.detail_url("e3df2ecd-c239")?.as_str(),
            "https://ll.thespacedevs.com/2.2.0/launch/e3df2ecd-c239/"
        );
        assert_eq!(
            client.detail_url("a/b")?.as_str(),
            "https://ll.thespacedevs.com/2.2.0/launch/a%2Fb/"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(client("not a url", true).is_err());
        assert!(client("mailto:someone@example.com", true).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_collapses_to_none() -> Result<()> {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = LaunchLibraryClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            timeout_secs: 2,
            ..Default::default()
        })?;

        assert_eq!(client.search("falcon").await, None);
        assert_eq!(client.get_launch("42").await, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_collapses_to_none() -> Result<()> {
        let client = local_client("500 Internal Server Error", r#"{"detail":"boom"}"#).await?;

        assert_eq!(client.search("falcon").await, None);
        assert_eq!(client.get_launch("42").await, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_body_collapses_to_none() -> Result<()> {
        let client = local_client("200 OK", "<html>maintenance</html>").await?;

        assert_eq!(client.search("falcon").await, None);
        assert_eq!(client.get_launch("42").await, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_search_decodes_list_payload() -> Result<()> {
        let body = r#"{"count":1,"results":[
            {"id":"1","name":"Falcon 9","mission":null,"status":{"name":"Go"}}
        ]}"#;
        let client = local_client("200 OK", body).await?;

        let found = client.search("falcon").await;

        assert_eq!(
            found.map(|launches| launches.into_iter().map(|l| l.name).collect::<Vec<_>>()),
            Some(vec!["Falcon 9".to_string()])
        );
        Ok(())
    }
}
