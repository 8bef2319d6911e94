use super::extract::extract_card;
use super::links::resolve_links;
use super::model::{EventRecord, EventSource};
use super::section::locate_section;
use super::segment::segment;
use crate::config::model::SourceConfig;
use crate::render::{PageRenderer, RenderError};
use futures::future;
use itertools::Itertools;
use scraper::Html;
use tracing::{debug, info, instrument};

pub struct AllConferenceAlertAPI<R: PageRenderer> {
    renderer: R,
    sources: Vec<SourceConfig>,
}

impl<R: PageRenderer> AllConferenceAlertAPI<R> {
    pub fn new(renderer: R, sources: Vec<SourceConfig>) -> Self {
        Self { renderer, sources }
    }

    /**
    Returns the events of every source, in the configured source order.

    Pages are rendered concurrently, and the first page that fails to render fails the run.
    */
    #[instrument(skip(self), fields(sources = self.sources.len()))]
    pub async fn get_events(&self) -> Result<Vec<EventRecord>, RenderError> {
        let pages = future::try_join_all(
            self.sources
                .iter()
                .map(|source| self.renderer.render(&source.url)),
        )
        .await?;

        let events = self
            .sources
            .iter()
            .zip(pages)
            .flat_map(|(source, html)| extract_events(&html, &source.region))
            .collect_vec();

        info!("Total parsed events: {}", events.len());

        Ok(events)
    }
}

/// Runs the whole extraction over one rendered listing page.
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn extract_events(html: &str, region: &str) -> Vec<EventRecord> {
    let document = Html::parse_document(html);
    let scope = locate_section(&document, region);

    let candidates = segment(&document, scope.node)
        .iter()
        .filter_map(|card| match extract_card(card, region) {
            Ok(candidate) => Some(candidate),
            Err(rejection) => {
                debug!("Dropping card: {}", rejection);
                None
            }
        })
        .collect_vec();

    let events = resolve_links(&document, scope.node, candidates);
    info!(
        "Parsed {} {} rows for {}",
        events.len(),
        EventSource::AllConferenceAlert,
        region
    );

    events
}
