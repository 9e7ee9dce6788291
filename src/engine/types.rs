// src/engine/types.rs
use std::fmt;

use chrono::NaiveDate;

use crate::store::Tabular;

pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn opt_date(d: Option<NaiveDate>) -> String {
    d.map(fmt_date).unwrap_or_default()
}

fn opt_num(n: Option<i64>) -> String {
    n.map(|v| v.to_string()).unwrap_or_default()
}

/// One row of a bill's history table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    pub bill_code: String,
    pub bill_description: String,
    /// 0-based position in the table as presented (newest first on this site).
    pub sequence_index: usize,
    pub date: NaiveDate,
    pub chamber: String,
    pub action: String,
    /// Taxonomy category; empty when no rule matched.
    pub category: String,
    pub is_vote: bool,
    pub vote_link: Option<String>,
}

impl Tabular for ActionRecord {
    const HEADERS: &'static [&'static str] = &[
        "bill_code", "bill_description", "row_order_desc", "date", "chamber",
        "action", "action_group", "is_vote", "voting_link",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.bill_code.clone(),
            self.bill_description.clone(),
            self.sequence_index.to_string(),
            fmt_date(self.date),
            self.chamber.clone(),
            self.action.clone(),
            self.category.clone(),
            s!(if self.is_vote { "1" } else { "0" }),
            self.vote_link.clone().unwrap_or_default(),
        ]
    }
}

/// Running totals for one bill, built up row by row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BillCounters {
    pub introduced_date: Option<NaiveDate>,
    pub num_actions: usize,
    pub num_amendment_motions: usize,
    pub num_committee_referrals: usize,
    pub num_hearings: usize,
    pub hearing_dates: Vec<NaiveDate>,
}

/// Output of one history-table walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillHistory {
    pub bill_code: String,
    pub description: String,
    pub actions: Vec<ActionRecord>,
    pub counters: BillCounters,
}

impl BillHistory {
    pub fn most_recent(&self) -> Option<&ActionRecord> {
        self.actions.iter().find(|a| a.sequence_index == 0)
    }

    pub fn votes(&self) -> impl Iterator<Item = &ActionRecord> {
        self.actions.iter().filter(|a| a.is_vote)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillMeta {
    pub bill_code: String,
    pub description: String,
    pub introduced_date: Option<NaiveDate>,
    pub num_actions: usize,
    pub num_amendment_motions: usize,
    pub num_committee_referrals: usize,
    pub num_hearings: usize,
    pub hearing_dates: Vec<NaiveDate>,
    pub current_chamber: String,
    pub most_recent_action_date: NaiveDate,
    pub most_recent_action: String,
    pub refresh_date: NaiveDate,
    pub days_intro_to_last_action: Option<i64>,
    pub days_since_last_action: i64,
    pub days_since_introduction: Option<i64>,
}

impl Tabular for BillMeta {
    const HEADERS: &'static [&'static str] = &[
        "bill_code", "bill_description", "introduced_date", "num_leg_actions",
        "num_amends_proposed", "num_comms_referred", "num_hearings_held", "hearing_dts",
        "refresh_date", "days_from_intro_to_last_action", "days_since_last_action",
        "days_since_introduction", "current_chamber", "most_recent_action_date",
        "most_recent_action",
    ];

    fn to_row(&self) -> Vec<String> {
        let hearings = self.hearing_dates.iter().copied().map(fmt_date).collect::<Vec<_>>().join(";");
        vec![
            self.bill_code.clone(),
            self.description.clone(),
            opt_date(self.introduced_date),
            self.num_actions.to_string(),
            self.num_amendment_motions.to_string(),
            self.num_committee_referrals.to_string(),
            self.num_hearings.to_string(),
            hearings,
            fmt_date(self.refresh_date),
            opt_num(self.days_intro_to_last_action),
            self.days_since_last_action.to_string(),
            opt_num(self.days_since_introduction),
            self.current_chamber.clone(),
            fmt_date(self.most_recent_action_date),
            self.most_recent_action.clone(),
        ]
    }
}

/// Which block of a roll call the scanner is currently in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteGroup {
    Yea,
    Nay,
    Present,
    AbsentNotVoting,
    NotVoting,
}

impl VoteGroup {
    pub fn label(&self) -> &'static str {
        match self {
            VoteGroup::Yea => "Yea",
            VoteGroup::Nay => "Nay",
            VoteGroup::Present => "Present",
            VoteGroup::AbsentNotVoting => "Absent and Not Voting",
            VoteGroup::NotVoting => "Not Voting",
        }
    }
}

impl fmt::Display for VoteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteRecord {
    pub bill_code: String,
    pub chamber: String,
    pub description: String,
    pub vote_type: String,
    pub date: NaiveDate,
    pub legislator: String,
    pub vote: VoteGroup,
    pub url: String,
}

impl Tabular for VoteRecord {
    const HEADERS: &'static [&'static str] = &[
        "bill_code", "chamber", "action", "vote_type", "date", "representative", "vote",
        "voting_info_url",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.bill_code.clone(),
            self.chamber.clone(),
            self.description.clone(),
            self.vote_type.clone(),
            fmt_date(self.date),
            self.legislator.clone(),
            s!(self.vote.label()),
            self.url.clone(),
        ]
    }
}
