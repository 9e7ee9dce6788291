// src/specs/votes.rs
//! Scraping *spec* for a roll-call page (`…/vote_view/…`).
//!
//! The roll call lives in `#main_content` as loose text: group headers
//! ("Yea - (120):") followed by comma-separated surnames. All this spec does
//! is hand that text over; `engine::votes` does the reading.

use crate::config::consts::VOTE_CONTENT_ID;
use crate::core::html::{self, Document};

/// Concatenated text nodes of `#main_content`, whitespace untouched so the
/// tokenizer sees the same token boundaries the page has.
pub fn page_text(doc: &Document) -> Option<String> {
    doc.find_by_id(VOTE_CONTENT_ID).map(html::raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{VoteContext, VoteGroup, tokenize};
    use chrono::NaiveDate;

    const PAGE: &str = r#"
        <html><body>
          <div id="nav">Yea: Navigation</div>
          <div id="main_content">
            <h2>HB2001 - Final Action</h2>
            <h3>Yea - (2):</h3>
            <p><a href="/m/rep_alcala">Alcala</a>, <a href="/m/rep_smith">Smith</a></p>
            <h3>Nay - (1):</h3>
            <p>Jones</p>
            <h3>Absent and Not Voting - (1):</h3>
            <p>Kim</p>
          </div>
        </body></html>"#;

    #[test]
    fn reads_only_main_content() {
        let text = page_text(&Document::parse(PAGE)).unwrap();
        assert!(text.contains("Alcala"));
        assert!(!text.contains("Navigation"));
    }

    #[test]
    fn missing_main_content_is_none() {
        assert_eq!(page_text(&Document::parse("<p>Yea: Smith</p>")), None);
    }

    #[test]
    fn page_text_tokenizes() {
        let ctx = VoteContext {
            bill_code: s!("HB2001"),
            chamber: s!("House"),
            description: s!("Final Action - Passed"),
            vote_type: s!("Passed Chamber Vote"),
            date: NaiveDate::from_ymd_opt(2023, 3, 23).unwrap(),
            url: s!("http://kslegislature.org/li/b2023_24/measures/vote_view/je_20230323_1/"),
        };
        let text = page_text(&Document::parse(PAGE)).unwrap();
        let votes: Vec<(String, VoteGroup)> =
            tokenize(&text, &ctx).into_iter().map(|r| (r.legislator, r.vote)).collect();
        assert_eq!(
            votes,
            vec![
                (s!("Alcala"), VoteGroup::Yea),
                (s!("Smith"), VoteGroup::Yea),
                (s!("Jones"), VoteGroup::Nay),
                (s!("Kim"), VoteGroup::AbsentNotVoting),
            ]
        );
    }
}
