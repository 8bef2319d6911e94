use std::time::Duration;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub browserless: BrowserlessConfig,
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub event_limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct BrowserlessConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

/// A region label and the listing page scraped for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub region: String,
    pub url: String,
}

impl SourceConfig {
    pub fn new(region: &str, url: &str) -> Self {
        Self {
            region: region.to_string(),
            url: url.to_string(),
        }
    }
}
