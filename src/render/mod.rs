pub mod browserless;

use async_trait::async_trait;
use thiserror::Error;

/// Acquires the fully rendered HTML of a page.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<String, RenderError>;
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Renderer error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Couldn't build renderer client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for RenderError {
    fn from(err: reqwest::Error) -> Self {
        RenderError::Network(err.to_string())
    }
}

impl From<reqwest_middleware::Error> for RenderError {
    fn from(err: reqwest_middleware::Error) -> Self {
        RenderError::Network(err.to_string())
    }
}
