// src/specs/history.rs
//! Scraping *spec* for a bill page.
//!
//! Purpose:
//! - Short description from the first `.truncated_text` node.
//! - Every `<table id="history-tab…">`, rows in document order. The site splits
//!   long histories over several tabs; the rows are concatenated so the
//!   resulting index keeps counting across tables.
//!
//! Each `<tr>` with `<td>` cells becomes a `HistoryRow` of cell texts plus the
//! hrefs of the third (action) cell. Header rows carry only `<th>` and are dropped.

use crate::config::consts::{DESCRIPTION_CLASS, HISTORY_TABLE_ID_PREFIX};
use crate::core::html::{self, Document};
use crate::engine::history::HistoryRow;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryPage {
    pub description: String,
    pub rows: Vec<HistoryRow>,
}

pub fn parse_page(doc: &Document) -> HistoryPage {
    let description = doc
        .find_by_class(DESCRIPTION_CLASS)
        .first()
        .map(|n| html::text(*n))
        .unwrap_or_default();

    let rows = doc
        .find_by_id_prefix(HISTORY_TABLE_ID_PREFIX)
        .into_iter()
        .flat_map(html::rows)
        .map(|cells| {
            let links = cells.get(2).map(|c| html::links(*c)).unwrap_or_default();
            HistoryRow::new(cells.into_iter().map(html::raw_text)).with_links(links)
        })
        .collect();

    HistoryPage { description, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="truncated_text">AN ACT concerning
             taxation; relating to income tax</div>
          <div class="truncated_text">second, ignored</div>
          <table id="history-tab-1">
            <tr><th>Date</th><th>Chamber</th><th>Status</th></tr>
            <tr><td>Thu, Mar 23, 2023</td><td>House</td>
                <td>Final Action - Passed; Yea: 120 Nay: 2
                    <a href="/li/b2023_24/measures/vote_view/je_20230323_1/">vote</a></td></tr>
            <tr><td>Tue, Jan 10, 2023</td><td>House</td><td>Referred to Committee on Taxation</td></tr>
          </table>
          <table id="history-tab-2">
            <tr><td>Mon, Jan 09, 2023</td><td>House</td><td>Introduced</td></tr>
          </table>
          <table id="other"><tr><td>x</td><td>y</td><td>z</td></tr></table>
        </body></html>"#;

    #[test]
    fn rows_span_all_history_tabs() {
        let page = parse_page(&Document::parse(PAGE));
        assert_eq!(page.description, "AN ACT concerning taxation; relating to income tax");
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.rows[0].cells[0], "Thu, Mar 23, 2023");
        assert_eq!(page.rows[0].links, vec![s!("/li/b2023_24/measures/vote_view/je_20230323_1/")]);
        assert!(page.rows[1].links.is_empty());
        assert_eq!(page.rows[2].cells[2], "Introduced");
    }

    #[test]
    fn missing_description_is_empty() {
        let page = parse_page(&Document::parse("<table id='history-tab-1'><tr><td>a</td></tr></table>"));
        assert_eq!(page.description, "");
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].cells, vec![s!("a")]);
    }

    #[test]
    fn parsed_rows_feed_the_walker() {
        use crate::engine::{HistoryTableParser, Taxonomy};
        let page = parse_page(&Document::parse(PAGE));
        let tax = Taxonomy::kansas();
        let h = HistoryTableParser::new(&tax).parse("HB2001", &page.description, &page.rows).unwrap();
        assert_eq!(h.actions.len(), 3);
        assert_eq!(h.actions[0].action, "Final Action - Passed; Yea: 120 Nay: 2 vote");
        assert!(h.actions[0].is_vote);
        assert_eq!(h.actions[2].sequence_index, 2);
        assert_eq!(h.counters.num_committee_referrals, 1);
    }
}
