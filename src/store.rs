// src/store.rs

/// A record that can be flattened into one table row.
/// `HEADERS` and `to_row` must line up column for column.
pub trait Tabular {
    const HEADERS: &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

/// Uniform table shape handed to the writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_records<R: Tabular>(records: &[R]) -> Self {
        Self {
            headers: Some(strings!(R::HEADERS)),
            rows: records.iter().map(Tabular::to_row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{ActionRecord, BillMeta, VoteRecord};

    fn assert_aligned<R: Tabular>(sample: &R) {
        assert_eq!(sample.to_row().len(), R::HEADERS.len());
    }

    #[test]
    fn every_record_shape_matches_its_headers() {
        use chrono::NaiveDate;
        use crate::engine::types::{BillCounters, VoteGroup};
        let d = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();

        assert_aligned(&ActionRecord {
            bill_code: s!("HB2001"), bill_description: s!(), sequence_index: 0, date: d,
            chamber: s!("House"), action: s!("Introduced"), category: s!("Introduced"),
            is_vote: false, vote_link: None,
        });
        let c = BillCounters::default();
        assert_aligned(&BillMeta {
            bill_code: s!("HB2001"), description: s!(), introduced_date: None,
            num_actions: c.num_actions, num_amendment_motions: 0, num_committee_referrals: 0,
            num_hearings: 0, hearing_dates: vec![], current_chamber: s!(),
            most_recent_action_date: d, most_recent_action: s!(), refresh_date: d,
            days_intro_to_last_action: None, days_since_last_action: 0, days_since_introduction: None,
        });
        assert_aligned(&VoteRecord {
            bill_code: s!(), chamber: s!(), description: s!(), vote_type: s!(), date: d,
            legislator: s!("Smith"), vote: VoteGroup::Yea, url: s!(),
        });
    }

    #[test]
    fn from_records_keeps_order() {
        struct Pair(&'static str, u8);
        impl Tabular for Pair {
            const HEADERS: &'static [&'static str] = &["name", "n"];
            fn to_row(&self) -> Vec<String> { vec![s!(self.0), self.1.to_string()] }
        }
        let ds = DataSet::from_records(&[Pair("a", 1), Pair("b", 2)]);
        assert_eq!(ds.headers.as_deref(), Some(&[s!("name"), s!("n")][..]));
        assert_eq!(ds.rows, vec![vec![s!("a"), s!("1")], vec![s!("b"), s!("2")]]);
        assert_eq!(ds.len(), 2);
    }
}
