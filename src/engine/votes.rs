// src/engine/votes.rs
use chrono::NaiveDate;

use crate::core::sanitize::{is_punct_only, trim_punct};
use crate::engine::types::{ActionRecord, VoteGroup, VoteRecord};

/// Everything a vote page's records inherit from the action that linked to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteContext {
    pub bill_code: String,
    pub chamber: String,
    pub description: String,
    pub vote_type: String,
    pub date: NaiveDate,
    pub url: String,
}

impl VoteContext {
    pub fn from_action(action: &ActionRecord, url: impl Into<String>) -> Self {
        Self {
            bill_code: action.bill_code.clone(),
            chamber: action.chamber.clone(),
            description: action.action.clone(),
            vote_type: action.category.clone(),
            date: action.date,
            url: url.into(),
        }
    }

    fn record(&self, legislator: String, vote: VoteGroup) -> VoteRecord {
        VoteRecord {
            bill_code: self.bill_code.clone(),
            chamber: self.chamber.clone(),
            description: self.description.clone(),
            vote_type: self.vote_type.clone(),
            date: self.date,
            legislator,
            vote,
            url: self.url.clone(),
        }
    }
}

/// Words inside multi-word headers. Anything else under an open group is a
/// name, digits included: a stray "82" after "Yea" is emitted as a legislator.
const CONNECTIVES: &[&str] = &["and", "Voting", "Passing"];

fn header_group(word: &str) -> Option<VoteGroup> {
    match word {
        "Yea" => Some(VoteGroup::Yea),
        "Nay" => Some(VoteGroup::Nay),
        "Present" => Some(VoteGroup::Present),
        "Absent" => Some(VoteGroup::AbsentNotVoting),
        _ => None,
    }
}

/// "J." style initial: two chars, the second a period.
fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next(), chars.next()), (Some(c), Some('.'), None) if c.is_alphabetic())
}

/// What a single token did to the scan.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Header, continuation or noise; nothing emitted.
    Skip,
    /// A name token under an active group.
    Name,
}

/// Scanner state for one vote page: the block we are in, if any yet.
/// Names seen before the first header have no group and are dropped.
#[derive(Debug, Default)]
struct RollState {
    active: Option<VoteGroup>,
}

impl RollState {
    fn step(&mut self, token: &str) -> Step {
        // Headers usually come as "Yea:" or "Nay -"; look at the bare word.
        let word = token.trim_end_matches([':', ',', ';']);

        if let Some(group) = header_group(word) {
            self.active = Some(group);
            return Step::Skip;
        }
        if word == "Not" {
            // "Absent and Not Voting" / "Present and Not Voting" stay in their block.
            if !matches!(self.active, Some(VoteGroup::AbsentNotVoting | VoteGroup::Present)) {
                self.active = Some(VoteGroup::NotVoting);
            }
            return Step::Skip;
        }
        if is_punct_only(token) || token.starts_with('(') || CONNECTIVES.contains(&trim_punct(token)) {
            return Step::Skip;
        }
        match self.active {
            Some(_) => Step::Name,
            None => Step::Skip,
        }
    }
}

/// Turn a vote page's plain text into one record per legislator.
///
/// Single pass over whitespace tokens. A header word (`Yea`, `Nay`, `Present`,
/// `Absent`, or `Not` outside an absent/present block) opens a group that
/// governs every following name until the next header. Never fails: tokens
/// that can't be attributed are dropped.
pub fn tokenize(page_text: &str, ctx: &VoteContext) -> Vec<VoteRecord> {
    let tokens: Vec<&str> = page_text.split_whitespace().collect();
    let mut state = RollState::default();
    let mut out = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        i += 1;

        if state.step(token) == Step::Skip {
            continue;
        }
        let Some(group) = state.active else { continue };

        let name = if is_initial(token) {
            match tokens.get(i) {
                Some(surname) => {
                    i += 1;
                    format!("{token} {}", trim_punct(surname))
                }
                None => s!(token),
            }
        } else {
            s!(trim_punct(token))
        };
        out.push(ctx.record(name, group));
    }

    logd!("{} {}: {} votes read", ctx.bill_code, ctx.url, out.len());
    out
}
