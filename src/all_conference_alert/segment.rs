use super::document::{text_lines, TextLine};
use ego_tree::NodeId;
use scraper::Html;
use std::mem;

/// Call to action closing every listing card
pub const CARD_BOUNDARY: &str = "View Event";

/// Fewer lines than this can't hold a title, a date and a location
pub const MIN_CARD_LINES: usize = 3;

pub fn segment(document: &Html, scope: NodeId) -> Vec<Vec<TextLine>> {
    split_cards(&text_lines(document, scope))
}

/**
Splits text lines into cards on every [CARD_BOUNDARY].

A card is whatever precedes its boundary; text after the last boundary is kept as
one more candidate. Cards with less than [MIN_CARD_LINES] lines are dropped.
*/
pub fn split_cards(lines: &[TextLine]) -> Vec<Vec<TextLine>> {
    let mut cards = Vec::new();
    let mut current = Vec::new();

    for line in lines {
        let mut pieces = line.text.split(CARD_BOUNDARY);

        if let Some(first) = pieces.next() {
            push_piece(&mut current, first, line.node);
        }

        for piece in pieces {
            cards.push(mem::take(&mut current));
            push_piece(&mut current, piece, line.node);
        }
    }
    cards.push(current);

    cards
        .into_iter()
        .filter(|card| card.len() >= MIN_CARD_LINES)
        .collect()
}

fn push_piece(card: &mut Vec<TextLine>, piece: &str, node: NodeId) {
    let piece = piece.trim();

    if !piece.is_empty() {
        card.push(TextLine::new(piece, node));
    }
}
