//! Quantity-capped collection of paged feeds
//!
//! Pure state machine behind every list operation. The imperative shell asks
//! [`Collector::wants_page`], fetches the page at [`Collector::cursor`], and
//! hands the extracted [`FeedPage`] back to [`Collector::absorb`].
//!
//! The quantity cap is checked before each entry, so a page can be consumed
//! only in part. An entry counts toward the cap even when it fails to map; it
//! is skipped and the walk continues.

use serde_json::Value;

use crate::feed::{CursorAdvance, FeedPage};
use crate::media::Media;

/// Outcome of absorbing a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFlow {
    /// Another page should be fetched.
    Continue,
    /// The cap was reached or the feed ran out.
    Done,
}

#[derive(Debug, Clone)]
pub struct Collector {
    quantity: usize,
    consumed: usize,
    cursor: String,
    has_more: bool,
    items: Vec<Media>,
}

impl Collector {
    pub fn new(quantity: usize) -> Self {
        Self {
            quantity,
            consumed: 0,
            cursor: String::new(),
            has_more: true,
            items: Vec::new(),
        }
    }

    /// Whether another page should be requested.
    pub fn wants_page(&self) -> bool {
        self.has_more && !self.is_full()
    }

    fn is_full(&self) -> bool {
        self.consumed >= self.quantity
    }

    /// Cursor to send with the next request. Empty before the first page.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Entries consumed so far, mapped or not.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn items(&self) -> &[Media] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Media> {
        self.items
    }

    /// Consume a page, mapping entries with `map` until the cap is reached.
    pub fn absorb<F>(&mut self, page: FeedPage, map: F) -> PageFlow
    where
        F: Fn(&Value) -> Option<Media>,
    {
        let consumed_before = self.consumed;
        let cursor_before = self.cursor.clone();

        for entry in &page.entries {
            if self.is_full() {
                return PageFlow::Done;
            }
            self.consumed += 1;

            if let Some(media) = map(entry) {
                if page.advance == CursorAdvance::LastMappedId {
                    self.cursor = media.id.clone();
                }
                self.items.push(media);
            }
        }

        self.has_more = page.has_more;
        if let CursorAdvance::EndCursor(next) = page.advance {
            self.cursor = next;
        }

        // An empty page that leaves the cursor in place would be fetched again forever.
        if self.consumed == consumed_before && self.cursor == cursor_before {
            self.has_more = false;
        }

        if self.wants_page() {
            PageFlow::Continue
        } else {
            PageFlow::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Feed;
    use serde_json::json;

    fn node(id: &str) -> Value {
        json!({"id": id, "code": format!("c{id}")})
    }

    fn cursor_page(ids: &[&str], has_more: bool, end_cursor: &str) -> FeedPage {
        FeedPage {
            entries: ids.iter().map(|id| node(id)).collect(),
            has_more,
            advance: CursorAdvance::EndCursor(end_cursor.to_string()),
        }
    }

    fn id_page(entries: Vec<Value>, has_more: bool) -> FeedPage {
        FeedPage {
            entries,
            has_more,
            advance: CursorAdvance::LastMappedId,
        }
    }

    fn ids(collector: &Collector) -> Vec<&str> {
        collector.items().iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_new_collector_wants_first_page() {
        let collector = Collector::new(10);
        assert!(collector.wants_page());
        assert_eq!(collector.cursor(), "");
    }

    #[test]
    fn test_zero_quantity_fetches_nothing() {
        let collector = Collector::new(0);
        assert!(!collector.wants_page());
        assert!(collector.into_items().is_empty());
    }

    #[test]
    fn test_end_cursor_is_carried_verbatim() {
        let feed = Feed::location("1");
        let mut collector = Collector::new(10);

        let flow = collector.absorb(cursor_page(&["1", "2"], true, "abc"), |e| {
            feed.map_entry(e)
        });

        assert_eq!(flow, PageFlow::Continue);
        assert_eq!(collector.cursor(), "abc");
    }

    #[test]
    fn test_cap_reached_mid_page() {
        let feed = Feed::tag("x");
        let mut collector = Collector::new(3);

        let flow = collector.absorb(cursor_page(&["1", "2", "3", "4", "5"], true, "next"), |e| {
            feed.map_entry(e)
        });

        assert_eq!(flow, PageFlow::Done);
        assert!(!collector.wants_page());
        assert_eq!(ids(&collector), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_cap_reached_exactly_at_page_end() {
        let feed = Feed::tag("x");
        let mut collector = Collector::new(2);

        let flow = collector.absorb(cursor_page(&["1", "2"], true, "next"), |e| {
            feed.map_entry(e)
        });

        assert_eq!(flow, PageFlow::Done);
        assert_eq!(collector.items().len(), 2);
    }

    #[test]
    fn test_feed_exhausted_before_cap() {
        let feed = Feed::tag("x");
        let mut collector = Collector::new(50);

        assert_eq!(
            collector.absorb(cursor_page(&["1", "2"], true, "p2"), |e| feed.map_entry(e)),
            PageFlow::Continue
        );
        assert_eq!(
            collector.absorb(cursor_page(&["3"], false, ""), |e| feed.map_entry(e)),
            PageFlow::Done
        );
        assert_eq!(ids(&collector), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unmapped_entries_count_toward_cap() {
        let feed = Feed::tag("x");
        let mut collector = Collector::new(3);
        let page = FeedPage {
            entries: vec![node("1"), json!({"code": "broken"}), node("3"), node("4")],
            has_more: true,
            advance: CursorAdvance::EndCursor("next".to_string()),
        };

        collector.absorb(page, |e| feed.map_entry(e));

        assert_eq!(collector.consumed(), 3);
        assert_eq!(ids(&collector), vec!["1", "3"]);
        assert!(!collector.wants_page());
    }

    #[test]
    fn test_last_mapped_id_advances_cursor() {
        let feed = Feed::account_media("nasa");
        let mut collector = Collector::new(10);
        let page = id_page(
            vec![
                json!({"id": "100_1", "code": "a"}),
                json!({"id": "99_1", "code": "b"}),
                json!({"code": "broken"}),
            ],
            true,
        );

        let flow = collector.absorb(page, |e| feed.map_entry(e));

        assert_eq!(flow, PageFlow::Continue);
        assert_eq!(collector.cursor(), "99_1");
        assert_eq!(collector.consumed(), 3);
    }

    #[test]
    fn test_last_mapped_id_keeps_cursor_when_nothing_maps() {
        let feed = Feed::account_media("nasa");
        let mut collector = Collector::new(10);
        collector.absorb(id_page(vec![json!({"id": "5_1", "code": "a"})], true), |e| {
            feed.map_entry(e)
        });

        collector.absorb(id_page(vec![json!({"code": "broken"})], true), |e| {
            feed.map_entry(e)
        });

        assert_eq!(collector.cursor(), "5_1");
        assert!(collector.wants_page());
    }

    #[test]
    fn test_empty_page_without_progress_stops() {
        let feed = Feed::account_media("nasa");
        let mut collector = Collector::new(10);

        let flow = collector.absorb(id_page(vec![], true), |e| feed.map_entry(e));

        assert_eq!(flow, PageFlow::Done);
        assert!(!collector.wants_page());
    }

    #[test]
    fn test_empty_page_with_new_cursor_continues() {
        let feed = Feed::location("1");
        let mut collector = Collector::new(10);

        let flow = collector.absorb(cursor_page(&[], true, "later"), |e| feed.map_entry(e));

        assert_eq!(flow, PageFlow::Continue);
        assert_eq!(collector.cursor(), "later");
    }
}
