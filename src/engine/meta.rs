// src/engine/meta.rs
use chrono::NaiveDate;

use crate::engine::types::{BillHistory, BillMeta};
use crate::error::ParseError;

/// Folds each bill's counters and most recent action into one metadata row.
/// `refresh_date` is fixed for the run, so every row measures against the same day.
pub struct BillMetadataAggregator {
    refresh_date: NaiveDate,
}

impl BillMetadataAggregator {
    pub fn new(refresh_date: NaiveDate) -> Self {
        Self { refresh_date }
    }

    /// The most recent action is the row at `sequence_index == 0`; the site
    /// lists history newest first.
    pub fn aggregate(&self, history: &BillHistory) -> Result<BillMeta, ParseError> {
        let last = history
            .most_recent()
            .ok_or_else(|| ParseError::MissingAction(history.bill_code.clone()))?;

        let c = &history.counters;
        let intro = c.introduced_date;
        let days = |from: NaiveDate, to: NaiveDate| (to - from).num_days();

        Ok(BillMeta {
            bill_code: history.bill_code.clone(),
            description: history.description.clone(),
            introduced_date: intro,
            num_actions: c.num_actions,
            num_amendment_motions: c.num_amendment_motions,
            num_committee_referrals: c.num_committee_referrals,
            num_hearings: c.num_hearings,
            hearing_dates: c.hearing_dates.clone(),
            current_chamber: last.chamber.clone(),
            most_recent_action_date: last.date,
            most_recent_action: last.action.clone(),
            refresh_date: self.refresh_date,
            days_intro_to_last_action: intro.map(|d| days(d, last.date)),
            days_since_last_action: days(last.date, self.refresh_date),
            days_since_introduction: intro.map(|d| days(d, self.refresh_date)),
        })
    }

    /// One row per bill that has actions; the rest are logged and left out.
    pub fn aggregate_all<'h>(&self, histories: impl IntoIterator<Item = &'h BillHistory>) -> Vec<BillMeta> {
        histories
            .into_iter()
            .filter_map(|h| match self.aggregate(h) {
                Ok(meta) => Some(meta),
                Err(e) => {
                    logw!("Metadata: {e}; bill excluded");
                    None
                }
            })
            .collect()
    }
}
