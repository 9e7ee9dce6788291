// src/specs/bills.rs
//! Scraping *spec* for the bill register.
//!
//! Purpose:
//! - Read the session's bill list (`measures/bills/`) and return one
//!   `BillListing` per `.module-title` anchor whose text carries a bill code.
//! - Titles look like `"HB2001 - AN ACT concerning taxation"`; the code is
//!   whatever precedes the first `" -"`.
//!
//! Titles without a recognizable code (resolutions, headings) are skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::LISTING_CLASS;
use crate::core::html::{self, Document};
use crate::store::Tabular;

static BILL_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"((?:SB|HB)\d+)\s-").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillListing {
    pub bill_code: String,
    pub chamber_of_origin: String,
    pub title: String,
    /// Site-relative link to the bill page.
    pub link: String,
}

impl Tabular for BillListing {
    const HEADERS: &'static [&'static str] = &["bill_code", "chamber_of_origin", "title", "link"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.bill_code.clone(),
            self.chamber_of_origin.clone(),
            self.title.clone(),
            self.link.clone(),
        ]
    }
}

pub fn chamber_of_origin(code: &str) -> &'static str {
    if code.starts_with("SB") {
        "Senate"
    } else if code.starts_with("HB") {
        "House"
    } else {
        ""
    }
}

pub fn bill_code(title: &str) -> Option<&str> {
    BILL_CODE.captures(title).and_then(|c| c.get(1)).map(|m| m.as_str())
}

pub fn parse_register(doc: &Document) -> Vec<BillListing> {
    let mut out = Vec::new();
    for anchor in doc.find_by_class(LISTING_CLASS) {
        let title = html::text(anchor);
        let Some(code) = bill_code(&title) else {
            logd!("Register: no bill code in '{title}'");
            continue;
        };
        out.push(BillListing {
            bill_code: s!(code),
            chamber_of_origin: s!(chamber_of_origin(code)),
            link: html::attr(anchor, "href").map(str::to_string).unwrap_or_default(),
            title,
        });
    }
    logf!("Register: {} bills", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"
        <ul>
          <li><a class="module-title" href="/li/b2023_24/measures/hb2001/">HB2001 - AN ACT concerning taxation</a></li>
          <li><a class="module-title" href="/li/b2023_24/measures/sb5/">SB5 - AN ACT concerning
              elections</a></li>
          <li><a class="module-title" href="/li/b2023_24/measures/hcr5001/">HCR5001 - Concurrent resolution</a></li>
          <li><a class="other" href="/elsewhere/">HB9 - not a listing</a></li>
        </ul>"#;

    #[test]
    fn register_reads_listed_bills_only() {
        let bills = parse_register(&Document::parse(LIST));
        assert_eq!(bills.len(), 2);

        assert_eq!(bills[0].bill_code, "HB2001");
        assert_eq!(bills[0].chamber_of_origin, "House");
        assert_eq!(bills[0].link, "/li/b2023_24/measures/hb2001/");
        assert_eq!(bills[0].title, "HB2001 - AN ACT concerning taxation");

        assert_eq!(bills[1].bill_code, "SB5");
        assert_eq!(bills[1].chamber_of_origin, "Senate");
        assert_eq!(bills[1].title, "SB5 - AN ACT concerning elections");
    }

    #[test]
    fn code_needs_trailing_dash() {
        assert_eq!(bill_code("HB2001 - x"), Some("HB2001"));
        assert_eq!(bill_code("HB2001"), None);
        assert_eq!(bill_code("SCR1601 - x"), None);
        assert_eq!(chamber_of_origin("XB1"), "");
    }
}
