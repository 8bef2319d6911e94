use super::document::{anchors, climb_from_text, find_text_node, root};
use super::model::{Candidate, EventRecord};
use ego_tree::NodeId;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use reqwest::Url;
use scraper::{ElementRef, Html};
use tracing::{debug, trace, warn};

pub const SITE_ORIGIN: &str = "https://www.allconferencealert.com";

/// Ancestors above the title element that wrap one card.
/// Tied to the current markup depth.
pub const CARD_ANCESTOR_LEVELS: usize = 6;

lazy_static! {
    static ref VIEW_EVENT_REGEX: Regex =
        Regex::new(r"(?i)view\s+event").expect("Failed to create view event regex");
}

/// Fills in each record's link, leaving it empty when the card can't be found.
#[tracing::instrument(skip_all, fields(records = candidates.len()))]
pub fn resolve_links(
    document: &Html,
    scope: NodeId,
    candidates: Vec<Candidate>,
) -> Vec<EventRecord> {
    candidates
        .into_iter()
        .map(|candidate| {
            let link = resolve_link(document, scope, &candidate);
            candidate.record.with_link(link)
        })
        .collect()
}

pub fn resolve_link(document: &Html, scope: NodeId, candidate: &Candidate) -> Option<String> {
    let title = &candidate.record.title;

    let Some(title_node) = candidate
        .title_node
        .or_else(|| find_title(document, scope, title))
    else {
        debug!("Title '{}' not found in page", title);
        return None;
    };

    let card = climb_from_text(document, title_node, CARD_ANCESTOR_LEVELS);
    let card_anchors = anchors(document, card);

    let anchor = card_anchors
        .iter()
        .find(|anchor| VIEW_EVENT_REGEX.is_match(&anchor_text(anchor)))
        .or_else(|| card_anchors.first());

    let Some(href) = anchor.and_then(|anchor| anchor.value().attr("href")) else {
        debug!("No link for '{}'", title);
        return None;
    };

    let link = normalize_link(href);
    trace!("Link for '{}' is {:?}", title, link);

    link
}

fn find_title(document: &Html, scope: NodeId, title: &str) -> Option<NodeId> {
    let pattern = match RegexBuilder::new(&format!(r"^\s*{}\s*$", regex::escape(title)))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            warn!("Invalid title pattern for '{}': {:?}", title, err);
            return None;
        }
    };

    find_text_node(document, scope, &pattern)
        .or_else(|| find_text_node(document, root(document), &pattern))
}

fn anchor_text(anchor: &ElementRef) -> String {
    anchor.text().collect::<String>()
}

/**
Turns an anchor target into an absolute URL on the listing site.

Returns `None` for targets that don't lead to a page (empty, `#...`, `javascript:`, `mailto:`).
*/
pub fn normalize_link(href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("//") {
        return Url::parse(&format!("https:{}", href))
            .ok()
            .filter(Url::has_host)
            .map(|url| url.to_string());
    }

    if href.starts_with('/') {
        return Some(format!("{}{}", SITE_ORIGIN, href));
    }

    match Url::parse(href) {
        Ok(url) if url.has_host() => Some(href.to_string()),
        Ok(_) => None,
        Err(_) => Url::parse(SITE_ORIGIN)
            .and_then(|origin| origin.join(href))
            .map(|url| url.to_string())
            .ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all_conference_alert::model::EventRecord;
    use chrono::NaiveDate;

    const CARD: &str = r#"
        <html><body>
          <div class="card">
            <div class="card-body">
              <div class="row">
                <div class="col">
                  <div class="meta">
                    <div class="title-wrap"><h3>Asia Clean Energy Summit</h3></div>
                    <p>20 December 2025</p>
                  </div>
                  <p>Manila, Philippines</p>
                </div>
              </div>
              <a href="/organizers/9">Organizer</a>
            </div>
            <a class="btn" href="/event/123">View Event</a>
          </div>
          <a href="/event/999">View Event</a>
        </body></html>"#;

    fn candidate(title: &str) -> Candidate {
        EventRecord::new(
            title.to_string(),
            "Philippines".to_string(),
            Some("Manila".to_string()),
            NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
        )
        .into()
    }

    #[test_log::test]
    fn should_prefer_view_event_anchor_in_card() {
        let document = Html::parse_document(CARD);

        let link = resolve_link(
            &document,
            root(&document),
            &candidate("asia clean energy SUMMIT"),
        );

        assert_eq!(
            link.as_deref(),
            Some("https://www.allconferencealert.com/event/123")
        );
    }

    #[test_log::test]
    fn should_fall_back_to_first_anchor_in_card() {
        let document = Html::parse_document(
            &CARD.replace(r#"href="/event/123">View Event"#, r#"href="/event/123">Details"#),
        );

        let link = resolve_link(
            &document,
            root(&document),
            &candidate("Asia Clean Energy Summit"),
        );

        assert_eq!(
            link.as_deref(),
            Some("https://www.allconferencealert.com/organizers/9")
        );
    }

    #[test_log::test]
    fn title_should_match_whole_text_only() {
        let document = Html::parse_document(CARD);

        let link = resolve_link(&document, root(&document), &candidate("Asia Clean Energy"));

        assert_eq!(link, None);
    }

    #[test_log::test]
    fn when_title_is_missing_should_leave_link_empty() {
        let document = Html::parse_document(CARD);

        let records = resolve_links(
            &document,
            root(&document),
            vec![candidate("Unknown Forum"), candidate("Asia Clean Energy Summit")],
        );

        assert_eq!(records[0].link, None);
        assert_eq!(
            records[1].link.as_deref(),
            Some("https://www.allconferencealert.com/event/123")
        );
    }

    #[test_log::test]
    fn when_title_is_outside_scope_should_search_whole_page() {
        let document = Html::parse_document(&format!(
            r#"<div id="section"><p>Other listing</p></div>{}"#,
            CARD.replace("<html><body>", "").replace("</body></html>", "")
        ));
        let section = document
            .select(&scraper::Selector::parse("#section").unwrap())
            .next()
            .unwrap()
            .id();

        let link = resolve_link(&document, section, &candidate("Asia Clean Energy Summit"));

        assert_eq!(
            link.as_deref(),
            Some("https://www.allconferencealert.com/event/123")
        );
    }

    #[test_log::test]
    fn when_card_has_no_anchor_should_leave_link_empty() {
        let document = Html::parse_document(
            "<div><div><div><div><div><div><div><h3>Grid Forum</h3>\
             </div></div></div></div></div></div></div>\
             <a href=\"/x\">View Event</a>",
        );

        let link = resolve_link(&document, root(&document), &candidate("Grid Forum"));

        assert_eq!(link, None);
    }

    #[test_log::test]
    fn root_relative_links_should_get_site_origin() {
        assert_eq!(
            normalize_link("/event/123").as_deref(),
            Some("https://www.allconferencealert.com/event/123")
        );
    }

    #[test_log::test]
    fn absolute_links_should_pass_through() {
        assert_eq!(
            normalize_link("https://example.org/events/7?ref=aca").as_deref(),
            Some("https://example.org/events/7?ref=aca")
        );
    }

    #[test_log::test]
    fn other_targets_should_still_be_absolute() {
        assert_eq!(
            normalize_link("//cdn.example.org/e/1").as_deref(),
            Some("https://cdn.example.org/e/1")
        );
        assert_eq!(
            normalize_link("event/55").as_deref(),
            Some("https://www.allconferencealert.com/event/55")
        );
        assert_eq!(normalize_link(""), None);
        assert_eq!(normalize_link("#"), None);
        assert_eq!(normalize_link("//"), None);
        assert_eq!(normalize_link("javascript:void(0)"), None);
        assert_eq!(normalize_link("mailto:events@example.org"), None);
    }
}
