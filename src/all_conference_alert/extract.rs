use super::date::{contains_date, parse_date};
use super::document::TextLine;
use super::model::{Candidate, EventRecord};
use thiserror::Error;
use voca_rs::case;

/// Case-sensitive nouns that mark a conference title
pub const TITLE_KEYWORDS: [&str; 8] = [
    "Conference",
    "Congress",
    "Summit",
    "Symposium",
    "Meeting",
    "Forum",
    "Expo",
    "Workshop",
];

/// Why a card didn't become a record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("no title line")]
    MissingTitle,
    #[error("no date line")]
    MissingDate,
    #[error("no location line")]
    MissingLocation,
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
}

/**
Reads a card's fields, each from the first line that qualifies:
* title: contains one of [TITLE_KEYWORDS]
* date: holds a date-shaped substring
* location: has a comma and mentions the region
*/
pub fn extract_card(lines: &[TextLine], region: &str) -> Result<Candidate, Rejection> {
    let region_lowercase = region.to_lowercase();

    let title = lines
        .iter()
        .find(|line| TITLE_KEYWORDS.iter().any(|keyword| line.text.contains(keyword)))
        .ok_or(Rejection::MissingTitle)?;
    let date = lines
        .iter()
        .find(|line| contains_date(&line.text))
        .ok_or(Rejection::MissingDate)?;
    let location = lines
        .iter()
        .find(|line| {
            line.text.contains(',') && line.text.to_lowercase().contains(&region_lowercase)
        })
        .ok_or(Rejection::MissingLocation)?;

    let starts_on =
        parse_date(&date.text).ok_or_else(|| Rejection::InvalidDate(date.text.to_string()))?;

    Ok(Candidate {
        record: EventRecord::new(
            title.text.to_string(),
            region.to_string(),
            city_of(&location.text),
            starts_on,
        ),
        title_node: Some(title.node),
    })
}

/// "manila, Philippines" -> "Manila"
pub fn city_of(location: &str) -> Option<String> {
    location
        .split(',')
        .next()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(title_case)
}

fn title_case(text: &str) -> String {
    text.split_inclusive(|c: char| !c.is_alphabetic())
        .map(|word| case::capitalize(word, true))
        .collect()
}
