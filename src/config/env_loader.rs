use crate::config::model::{BrowserlessConfig, Config, DebugConfig, SourceConfig};
use itertools::Itertools;
use std::env;
use std::time::Duration;

const LISTING_URL_TEMPLATE: &str = "https://www.allconferencealert.com/{}/energy-conference.html";
const DEFAULT_REGIONS: [&str; 3] = ["Singapore", "Malaysia", "Philippines"];
const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 60;

pub fn load_config() -> Config {
    let base_url =
        env::var("BROWSERLESS_URL").unwrap_or_else(|_| panic!("BROWSERLESS_URL must be set."));
    let token = env::var("BROWSERLESS_TOKEN").ok().filter(|token| !token.is_empty());
    let timeout_secs = load_u64_config("RENDER_TIMEOUT_SECS", DEFAULT_RENDER_TIMEOUT_SECS);

    let debug_event_limit = load_usize_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
        browserless: BrowserlessConfig {
            base_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
        },
        sources: load_sources_config("ACA_REGIONS"),
    }
}

fn load_sources_config(name: &str) -> Vec<SourceConfig> {
    let regions = match env::var(name) {
        Ok(value) => value
            .split(',')
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map(str::to_string)
            .unique()
            .collect_vec(),
        Err(_) => DEFAULT_REGIONS.iter().map(|region| region.to_string()).collect(),
    };

    if regions.is_empty() {
        panic!("Invalid config '{}'. Expected at least one region.", name);
    }

    regions.iter().map(|region| source_for_region(region)).collect()
}

/// "South Korea" -> https://www.allconferencealert.com/south-korea/energy-conference.html
pub fn source_for_region(region: &str) -> SourceConfig {
    let slug = region.split_whitespace().join("-").to_lowercase();

    SourceConfig::new(region, &LISTING_URL_TEMPLATE.replace("{}", &slug))
}

fn load_u64_config(name: &str, default: u64) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected a positive integer.", name))
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a positive integer.", name)
        })),
        Err(_) => None,
    }
}
