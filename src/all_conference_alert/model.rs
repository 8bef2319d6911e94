use chrono::NaiveDate;
use ego_tree::NodeId;
use serde::Serialize;

/// Site the records were scraped from
#[derive(strum::Display, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    AllConferenceAlert,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,
    pub region: String,
    pub city: Option<String>,
    /// Not present on the listing cards
    pub venue: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub link: Option<String>,
    pub source: EventSource,
}

impl EventRecord {
    pub fn new(title: String, region: String, city: Option<String>, starts_on: NaiveDate) -> Self {
        Self {
            title,
            region,
            city,
            venue: None,
            starts_on,
            ends_on: None,
            link: None,
            source: EventSource::AllConferenceAlert,
        }
    }

    pub fn with_link(self, link: Option<String>) -> Self {
        Self { link, ..self }
    }
}

/// An accepted card, still tied to the text node its title was read from.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub record: EventRecord,
    pub title_node: Option<NodeId>,
}

impl From<EventRecord> for Candidate {
    fn from(record: EventRecord) -> Self {
        Self {
            record,
            title_node: None,
        }
    }
}
