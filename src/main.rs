use confalert::all_conference_alert::api::AllConferenceAlertAPI;
use confalert::config::env_loader::load_config;
use confalert::config::model::Config;
use confalert::logging::setup_loki;
use confalert::render::browserless::BrowserlessRenderer;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_loki().await;
    let config = load_config();

    let exit_code = match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Events ingest failed: {}", err);
            ExitCode::FAILURE
        }
    };

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        let _ = handle.await;
    }

    exit_code
}

async fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let renderer = BrowserlessRenderer::new(&config.browserless)?;
    let api = AllConferenceAlertAPI::new(renderer, config.sources);

    let mut events = api.get_events().await?;

    if let Some(limit) = config.debug_config.event_limit {
        info!("Limiting output to {} events", limit);
        events.truncate(limit);
    }

    println!("{}", serde_json::to_string_pretty(&events)?);

    Ok(())
}
