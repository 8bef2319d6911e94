use super::{PageRenderer, RenderError};
use crate::config::model::BrowserlessConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use serde_json::json;
use tracing::{info, instrument};

const MAX_RETRIES: u32 = 3;
/// Navigation is done once the DOM is parsed, scripts may still be loading
const WAIT_UNTIL: &str = "domcontentloaded";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

/// Renders pages through a Browserless `/content` endpoint.
pub struct BrowserlessRenderer {
    client: ClientWithMiddleware,
    endpoint: Url,
    timeout_ms: u64,
}

impl BrowserlessRenderer {
    pub fn new(config: &BrowserlessConfig) -> Result<Self, RenderError> {
        // Leave room for the browser's own navigation timeout
        let client = Client::builder()
            .timeout(config.timeout * 2)
            .build()
            .map_err(|err| RenderError::Client(err.to_string()))?;

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES),
            ))
            .build();

        Ok(Self {
            client,
            endpoint: content_endpoint(config)?,
            timeout_ms: config.timeout.as_secs() * 1000,
        })
    }
}

/// `<base_url>/content`, with the token as a query parameter when set
fn content_endpoint(config: &BrowserlessConfig) -> Result<Url, RenderError> {
    let mut endpoint = Url::parse(&config.base_url)
        .map_err(|err| RenderError::Client(format!("invalid Browserless URL: {}", err)))?;

    endpoint
        .path_segments_mut()
        .map_err(|_| RenderError::Client("Browserless URL can't have a path".to_string()))?
        .pop_if_empty()
        .push("content");

    if let Some(token) = &config.token {
        endpoint.query_pairs_mut().append_pair("token", token);
    }

    Ok(endpoint)
}

#[async_trait]
impl PageRenderer for BrowserlessRenderer {
    #[instrument(skip(self))]
    async fn render(&self, url: &str) -> Result<String, RenderError> {
        info!("GET {}", url);

        let body = json!({
            "url": url,
            "setExtraHTTPHeaders": {
                "User-Agent": USER_AGENT,
            },
            "gotoOptions": {
                "waitUntil": WAIT_UNTIL,
                "timeout": self.timeout_ms,
            },
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RenderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let html = response.text().await?;
        info!("HTML size: {}", html.len());

        Ok(html)
    }
}
