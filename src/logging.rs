use lazy_static::lazy_static;
use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::{BackgroundTask, BackgroundTaskController};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

lazy_static! {
    static ref LOKI_URL: Option<String> = env::var("LOKI_URL").ok();
}

fn build_loki_layer(
    base_url: Url,
) -> Result<
    (
        tracing_loki::Layer,
        BackgroundTaskController,
        BackgroundTask,
    ),
    tracing_loki::Error,
> {
    tracing_loki::builder()
        .label("service", "confalert")?
        .build_controller_url(base_url)
}

/// Logs go to stderr, stdout is left for the scraped records.
pub async fn setup_loki() -> Option<(BackgroundTaskController, JoinHandle<()>)> {
    let filter = filter::Targets::new()
        .with_target("confalert", Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr));

    let Some(base_url) = LOKI_URL.as_ref() else {
        registry.init();
        warn!("Loki URL not provided. Continuing without it.");
        return None;
    };

    let base_url: Url = match base_url.parse() {
        Ok(url) => url,
        Err(_) => {
            registry.init();
            warn!("Invalid Loki URL '{}'. Continuing without it.", base_url);
            return None;
        }
    };

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    match build_loki_layer(base_url) {
        Ok((layer, controller, task)) => {
            registry.with(layer).init();
            let handle = tokio::spawn(task);

            info!("Loki initialized");

            Some((controller, handle))
        }
        Err(err) => {
            registry.init();
            warn!("Failed building Loki layer ({}). Continuing without it.", err);
            None
        }
    }
}
