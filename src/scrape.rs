// src/scrape.rs
//! Fetch + parse, page by page. Everything here returns data in memory;
//! writing is the runner's job.
//!
//! Fetch failures propagate and end the run. Per-bill parse failures are
//! logged, reported to `progress`, and the bill is skipped.

use crate::{
    config::options::ScrapeOptions,
    core::{Document, Fetch, net::join_url},
    engine::{BillHistory, HistoryTableParser, Taxonomy, VoteContext, VoteRecord, tokenize},
    error::{Result, ScrapeError},
    progress::Progress,
    specs::{
        self,
        bills::BillListing,
        legislators::Legislator,
    },
};

/// The session's full bill list, unfiltered.
pub fn collect_register(fetch: &dyn Fetch, scrape: &ScrapeOptions) -> Result<Vec<BillListing>> {
    let url = join_url(&scrape.base_url, &scrape.bills_path());
    let doc = Document::parse(&fetch.fetch(&url)?);
    Ok(specs::bills::parse_register(&doc))
}

/// Apply the bill filter, then the limit, keeping register order.
pub fn select_bills<'a>(register: &'a [BillListing], scrape: &ScrapeOptions) -> Vec<&'a BillListing> {
    register
        .iter()
        .filter(|b| scrape.bills.matches(&b.bill_code))
        .take(scrape.limit.unwrap_or(usize::MAX))
        .collect()
}

/// Parsed histories plus the bills that could not be parsed.
#[derive(Debug, Default)]
pub struct HistoryBatch {
    pub histories: Vec<BillHistory>,
    /// `(bill_code, reason)`
    pub skipped: Vec<(String, String)>,
}

pub fn collect_histories(
    fetch: &dyn Fetch,
    scrape: &ScrapeOptions,
    bills: &[&BillListing],
    taxonomy: &Taxonomy,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<HistoryBatch> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin("histories", bills.len());
    }

    let parser = HistoryTableParser::new(taxonomy);
    let mut batch = HistoryBatch::default();

    for bill in bills {
        let url = join_url(&scrape.base_url, &bill.link);
        let doc = Document::parse(&fetch.fetch(&url)?);
        let page = specs::history::parse_page(&doc);

        match parser.parse(&bill.bill_code, &page.description, &page.rows) {
            Ok(history) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&bill.bill_code);
                }
                batch.histories.push(history);
            }
            Err(e) => {
                loge!("Skipping {}: {e}", bill.bill_code);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&bill.bill_code, &e.to_string());
                }
                batch.skipped.push((bill.bill_code.clone(), e.to_string()));
            }
        }
    }

    logf!("Histories: {} parsed, {} skipped", batch.histories.len(), batch.skipped.len());
    Ok(batch)
}

/// One vote page per action flagged as a vote, in history order.
pub fn collect_votes(
    fetch: &dyn Fetch,
    scrape: &ScrapeOptions,
    histories: &[BillHistory],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<VoteRecord>> {
    let actions: Vec<_> = histories.iter().flat_map(BillHistory::votes).collect();
    if let Some(p) = progress.as_deref_mut() {
        p.begin("votes", actions.len());
    }

    let mut out = Vec::new();
    for action in actions {
        let Some(link) = action.vote_link.as_deref() else { continue };
        let url = join_url(&scrape.base_url, link);
        let doc = Document::parse(&fetch.fetch(&url)?);

        match specs::votes::page_text(&doc) {
            Some(text) => {
                let ctx = VoteContext::from_action(action, url);
                out.extend(tokenize(&text, &ctx));
            }
            None => {
                let e = ScrapeError::MissingNode { what: "#main_content", url };
                logw!("{} votes: {e}", action.bill_code);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&action.bill_code);
        }
    }

    logf!("Votes: {} records", out.len());
    Ok(out)
}

pub fn collect_legislators(
    fetch: &dyn Fetch,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<Legislator>> {
    let list_url = join_url(&scrape.base_url, &scrape.members_path());
    let members = specs::legislators::parse_member_list(&Document::parse(&fetch.fetch(&list_url)?));
    if let Some(p) = progress.as_deref_mut() {
        p.begin("legislators", members.len());
    }

    let mut out = Vec::with_capacity(members.len());
    for member in &members {
        let url = join_url(&scrape.base_url, &member.link);
        let doc = Document::parse(&fetch.fetch(&url)?);
        out.push(specs::legislators::parse_bio(&doc, member, &url));
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&member.short_name);
        }
    }

    logf!("Legislators: {}", out.len());
    Ok(out)
}
