// src/engine/history.rs
use chrono::NaiveDate;

use crate::config::consts::{HISTORY_DATE_FORMAT, VOTE_LINK_MARKER};
use crate::core::sanitize::normalize_ws;
use crate::engine::taxonomy::{Taxonomy, category};
use crate::engine::types::{ActionRecord, BillCounters, BillHistory};
use crate::error::ParseError;

/// One history-table row as the page presents it: cell texts in column order
/// (date, chamber, action, …) plus the hrefs found in the action cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryRow {
    pub cells: Vec<String>,
    pub links: Vec<String>,
}

impl HistoryRow {
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self { cells: cells.into_iter().map(Into::into).collect(), links: Vec::new() }
    }

    pub fn with_links<S: Into<String>>(mut self, links: impl IntoIterator<Item = S>) -> Self {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }
}

/// The vote page link, when exactly one link carries the marker.
/// Zero or several candidates are treated as "not a vote".
pub fn detect_vote_link(links: &[String]) -> Option<&str> {
    let mut hits = links.iter().filter(|l| l.contains(VOTE_LINK_MARKER));
    match (hits.next(), hits.next()) {
        (Some(only), None) => Some(only.as_str()),
        _ => None,
    }
}

pub fn parse_history_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), HISTORY_DATE_FORMAT)
}

impl BillCounters {
    /// Fold one action into the running totals.
    fn record(&mut self, date: NaiveDate, action: &str, group: &str) {
        self.num_actions += 1;

        if action == category::INTRODUCED && self.introduced_date.is_none() {
            self.introduced_date = Some(date);
        }
        if action.contains("Motion to Amend") {
            self.num_amendment_motions += 1;
        }
        if group == category::REFERRED || action.contains("rerefer") || action.contains("re-refer") {
            self.num_committee_referrals += 1;
        }
        if action.contains("Hearing") {
            self.num_hearings += 1;
            self.hearing_dates.push(date);
        }
    }
}

/// Walks one bill's history table, classifying each action and keeping the
/// per-bill counters. Holds no state between bills.
pub struct HistoryTableParser<'t> {
    taxonomy: &'t Taxonomy,
}

impl<'t> HistoryTableParser<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Any malformed row or bad date aborts the whole bill.
    pub fn parse(
        &self,
        bill_code: &str,
        description: &str,
        rows: &[HistoryRow],
    ) -> Result<BillHistory, ParseError> {
        let mut counters = BillCounters::default();
        let mut actions = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let [date_cell, chamber_cell, action_cell, ..] = row.cells.as_slice() else {
                return Err(ParseError::MalformedRow {
                    bill_code: s!(bill_code),
                    index,
                    found: row.cells.len(),
                });
            };

            let date = parse_history_date(date_cell).map_err(|source| ParseError::DateParse {
                bill_code: s!(bill_code),
                index,
                raw: date_cell.clone(),
                source,
            })?;
            let chamber = s!(chamber_cell.trim());
            let action = normalize_ws(action_cell);

            let group = self.taxonomy.classify(&action);
            if group.is_empty() {
                logw!("{bill_code}: unclassified action '{action}'");
            }
            counters.record(date, &action, group);

            let vote_link = detect_vote_link(&row.links).map(str::to_string);
            actions.push(ActionRecord {
                bill_code: s!(bill_code),
                bill_description: s!(description),
                sequence_index: index,
                date,
                chamber,
                action,
                category: s!(group),
                is_vote: vote_link.is_some(),
                vote_link,
            });
        }

        logd!("{bill_code}: {} actions, {} hearings", counters.num_actions, counters.num_hearings);
        Ok(BillHistory {
            bill_code: s!(bill_code),
            description: s!(description),
            actions,
            counters,
        })
    }
}
