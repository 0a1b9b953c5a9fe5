//! Numbered-list heuristic for per-item copy.
//!
//! Lines opening with `<digits>.` or `<digits>)` start an item; following
//! non-blank lines are soft-wrapped onto it. Three or more items switch the
//! output to card rendering, otherwise the text is shown as one block.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum number of items before output is rendered as cards.
pub const LIST_THRESHOLD: usize = 3;

static ITEM_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[.)]\s*(.+)").expect("Invalid list item regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Digits as written, e.g. `"07"`.
    pub number: String,
    pub content: String,
}

/// How a single tone's text is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView<'a> {
    List(Vec<ListItem>),
    Block(&'a str),
}

pub fn parse_numbered_list(text: &str) -> Vec<ListItem> {
    let mut items = Vec::new();
    let mut current: Option<ListItem> = None;

    for line in text.lines() {
        if let Some(caps) = ITEM_START.captures(line) {
            if let Some(done) = current.take() {
                items.push(done);
            }
            current = Some(ListItem {
                number: caps[1].to_string(),
                content: caps[2].to_string(),
            });
        } else if let Some(item) = current.as_mut() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                item.content.push(' ');
                item.content.push_str(trimmed);
            }
        }
    }

    if let Some(done) = current {
        items.push(done);
    }

    items
}

/// Chooses card or block rendering for `text`.
pub fn result_view(text: &str) -> ResultView<'_> {
    let items = parse_numbered_list(text);
    if items.len() >= LIST_THRESHOLD {
        ResultView::List(items)
    } else {
        ResultView::Block(text)
    }
}
