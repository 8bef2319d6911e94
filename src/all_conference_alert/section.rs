use super::document::{climb_from_text, find_text_node, root};
use ego_tree::NodeId;
use regex::{Regex, RegexBuilder};
use scraper::Html;
use tracing::{debug, warn};

const HEADING_PHRASE: &str = "Upcoming Energy Conferences in";

/// Ancestors above the heading element that wrap the whole listing.
/// Tied to the current markup depth.
pub const SECTION_ANCESTOR_LEVELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionScope {
    pub node: NodeId,
    /// Whether the region heading was found, otherwise `node` is the document root
    pub anchored: bool,
}

pub fn heading_pattern(region: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(
        "{} .*{}",
        regex::escape(HEADING_PHRASE),
        regex::escape(region)
    ))
    .case_insensitive(true)
    .build()
}

#[tracing::instrument(skip(document))]
pub fn locate_section(document: &Html, region: &str) -> SectionScope {
    let whole_document = SectionScope {
        node: root(document),
        anchored: false,
    };

    let pattern = match heading_pattern(region) {
        Ok(pattern) => pattern,
        Err(err) => {
            warn!("Invalid heading pattern, using the whole page: {:?}", err);
            return whole_document;
        }
    };

    match find_text_node(document, whole_document.node, &pattern) {
        Some(heading) => {
            debug!("Found region heading");

            SectionScope {
                node: climb_from_text(document, heading, SECTION_ANCESTOR_LEVELS),
                anchored: true,
            }
        }
        None => {
            debug!("No region heading, using the whole page");
            whole_document
        }
    }
}
