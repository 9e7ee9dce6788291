// src/engine/taxonomy.rs
//! Action taxonomy: an ordered list of `(condition, category)` rules.
//!
//! Rules are evaluated top to bottom and the **first match wins**. Conditions
//! overlap on purpose (plenty of actions say "passed"), so position in the
//! table is what gives a narrow rule priority over a broad one. Moving a rule
//! changes results.
//!
//! The built-in table covers the Kansas Legislature's procedural vocabulary.
//! A different table can be loaded from JSON without touching the evaluator:
//!
//! ```json
//! { "version": "ks-2025_26.1",
//!   "rules": [
//!     { "category": "Hearing",
//!       "when": { "all": [ { "contains_cs": "Hearing" }, { "not": { "contains": "canceled" } } ] } },
//!     { "category": "Introduced", "when": { "exact": "Introduced" } }
//!   ] }
//! ```
//!
//! A bare rule list is accepted too and is reported as `unversioned`.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identifies the built-in rule set; bump when rules are added or reordered.
pub const KANSAS_TAXONOMY_VERSION: &str = "ks-2023_24.1";

/// Version reported for rule files that don't declare one.
pub const UNVERSIONED: &str = "unversioned";

pub mod category {
    pub const REFERRED: &str = "Referred to Committee";
    pub const HEARING: &str = "Hearing";
    pub const HEARING_CANCELED: &str = "Hearing Canceled";
    pub const COMMITTEE_REPORT: &str = "Committee Report Submitted";
    pub const GOVERNOR_ACTION: &str = "Action Taken by Governor";
    pub const AWAITING_GOVERNOR: &str = "Awaiting Governor";
    pub const PASSED_CHAMBER: &str = "Passed Chamber Vote";
    pub const PENDING_FLOOR: &str = "Pending Floor Vote or Action";
    pub const INTRODUCED: &str = "Introduced";
    pub const STRICKEN_1507: &str = "Stricken from Calendar by Rule 1507";
    pub const PREFILED: &str = "Prefiled for Introduction";
    pub const MOTION_TO_AMEND: &str = "Motion to Amend";
    pub const AMENDMENT_ADOPTED: &str = "Amendment Adopted";
    pub const AMENDMENT_REJECTED: &str = "Amendment Rejected";
    pub const COMMITTEE_REPORT_ADOPTED: &str = "Committee Report Adopted";
    pub const ENGROSSED: &str = "Bill Engrossed";
    pub const AMENDMENT_CHALLENGED: &str = "Amendment Challenged";
    pub const WITHDRAWN: &str = "Withdrawn from Committee";
    pub const CONSENT_CALENDAR: &str = "Added to Consent Calendar";
    pub const REREFER_PASSED: &str = "Motion to Rerefer - Passed";
    pub const REREFER_FAILED: &str = "Motion to Rerefer - Failed";
    pub const NONCONCURRENCE: &str = "Nonconcurrence with Amendments from Counterpart Chamber";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Case-insensitive substring.
    Contains(String),
    /// Case-sensitive substring.
    ContainsCs(String),
    /// Whole text, case-sensitive.
    Exact(String),
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

/// The action text plus its lowercase form, computed once per classification.
struct Subject<'a> {
    raw: &'a str,
    lower: String,
}

impl Condition {
    fn matches(&self, s: &Subject<'_>) -> bool {
        match self {
            Condition::Contains(needle) => s.lower.contains(needle.as_str()),
            Condition::ContainsCs(needle) => s.raw.contains(needle.as_str()),
            Condition::Exact(text) => s.raw == text,
            Condition::All(cs) => cs.iter().all(|c| c.matches(s)),
            Condition::Any(cs) => cs.iter().any(|c| c.matches(s)),
            Condition::Not(c) => !c.matches(s),
        }
    }

    // Lowercase case-insensitive needles up front so matching never allocates.
    fn normalized(self) -> Self {
        match self {
            Condition::Contains(n) => Condition::Contains(n.to_lowercase()),
            Condition::All(cs) => Condition::All(cs.into_iter().map(Condition::normalized).collect()),
            Condition::Any(cs) => Condition::Any(cs.into_iter().map(Condition::normalized).collect()),
            Condition::Not(c) => Condition::Not(Box::new(c.normalized())),
            other => other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub category: String,
    pub when: Condition,
}

/// On-disk shape of a rule file.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TaxonomyFile {
    Versioned { version: String, rules: Vec<Rule> },
    Bare(Vec<Rule>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taxonomy {
    version: String,
    rules: Vec<Rule>,
}

impl Taxonomy {
    pub fn new(version: impl Into<String>, rules: Vec<Rule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| Rule { category: r.category, when: r.when.normalized() })
            .collect();
        Self { version: version.into(), rules }
    }

    pub fn from_json(src: &str) -> Result<Self> {
        let tax = match serde_json::from_str(src)? {
            TaxonomyFile::Versioned { version, rules } => Self::new(version, rules),
            TaxonomyFile::Bare(rules) => Self::new(UNVERSIONED, rules),
        };
        Ok(tax)
    }

    /// Versioned form, readable by `from_json`.
    pub fn to_json(&self) -> Result<String> {
        let file = TaxonomyFile::Versioned { version: self.version.clone(), rules: self.rules.clone() };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let tax = Self::from_json(&src)?;
        logd!("Read taxonomy {} from {}", tax.version, path.display());
        Ok(tax)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index of the winning rule, if any.
    pub fn rule_index(&self, raw: &str) -> Option<usize> {
        let subject = Subject { raw, lower: raw.to_lowercase() };
        self.rules.iter().position(|r| r.when.matches(&subject))
    }

    /// Category of the first matching rule; `""` when nothing matches.
    pub fn classify(&self, raw: &str) -> &str {
        self.rule_index(raw)
            .map(|i| self.rules[i].category.as_str())
            .unwrap_or("")
    }

    /// The Kansas Legislature rule set, in evaluation order.
    pub fn kansas() -> Self {
        use category::*;
        use Condition::*;

        let c = |s: &str| Contains(s.into());
        let cs = |s: &str| ContainsCs(s.into());
        let exact = |s: &str| Exact(s.into());
        let rule = |category: &str, when: Condition| Rule { category: category.into(), when };

        Self::new(KANSAS_TAXONOMY_VERSION, vec![
            rule(REFERRED, c("referred")),
            rule(HEARING, All(vec![cs("Hearing"), Not(Box::new(c("CANCELED")))])),
            rule(HEARING_CANCELED, All(vec![cs("Hearing"), c("CANCELED")])),
            rule(COMMITTEE_REPORT, c("committee report recommending")),
            rule(GOVERNOR_ACTION, c("by governor on")),
            rule(AWAITING_GOVERNOR, c("enrolled and presented to governor")),
            rule(PASSED_CHAMBER, All(vec![c("passed"), c("final action")])),
            rule(PASSED_CHAMBER, c("substitute bill be passed")),
            rule(PASSED_CHAMBER, cs("Committee of the Whole - Be passed")),
            rule(PENDING_FLOOR, c("passed over and retain a place")),
            rule(PENDING_FLOOR, c("general orders")),
            rule(INTRODUCED, exact("Introduced")),
            rule(STRICKEN_1507, exact("Stricken from Calendar by Rule 1507")),
            rule(PREFILED, c("prefiled for introduction")),
            // Received in the second chamber
            rule(PENDING_FLOOR, cs("Received and Introduced")),
            rule(MOTION_TO_AMEND, c("motion to amend")),
            rule(AMENDMENT_ADOPTED, All(vec![c("amendment"), Any(vec![c("was adopted"), c("passed")])])),
            rule(AMENDMENT_REJECTED, All(vec![c("amendment"), c("was rejected")])),
            rule(COMMITTEE_REPORT_ADOPTED, exact("Committee of the Whole - Committee Report be adopted")),
            rule(ENGROSSED, c("engrossed")),
            rule(AMENDMENT_CHALLENGED, c("amendment was ruled")),
            rule(WITHDRAWN, c("withdrawn from committee on")),
            rule(CONSENT_CALENDAR, c("consent calendar passed")),
            rule(REREFER_PASSED, All(vec![c("to rerefer"), c("passed")])),
            rule(REREFER_FAILED, c("to rerefer")),
            rule(NONCONCURRENCE, c("nonconcurred with amendments")),
        ])
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::kansas()
    }
}

static KANSAS: LazyLock<Taxonomy> = LazyLock::new(Taxonomy::kansas);

/// Classify against the built-in table.
pub fn classify(raw: &str) -> &'static str {
    KANSAS.classify(raw)
}

#[cfg(test)]
mod tests {
    use super::category::*;
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(classify("Introduced"), INTRODUCED);
        assert_eq!(classify("Hearing: Canceled"), HEARING_CANCELED);
        assert_eq!(classify("Motion to amend adopted"), MOTION_TO_AMEND);
        assert_eq!(classify("xyz nonsense"), "");
    }

    #[test]
    fn earlier_rule_wins_over_broader_later_rule() {
        // Matches rule 4 and rule 8; rule 4 comes first.
        assert_eq!(
            classify("committee report recommending substitute bill be passed"),
            COMMITTEE_REPORT
        );
        // "referred" beats everything, even a hearing mention.
        assert_eq!(classify("Referred to Committee on Taxation; Hearing set"), REFERRED);
        // Passed + amendment, but "motion to amend" sits earlier.
        assert_eq!(classify("Motion to amend - amendment passed"), MOTION_TO_AMEND);
        // Both rerefer rules match; the "passed" variant is listed first.
        assert_eq!(classify("Motion to rerefer to Committee on Judiciary passed"), REREFER_PASSED);
    }

    #[test]
    fn one_sample_per_rule_hits_that_rule() {
        let samples = [
            ("Referred to Committee on Commerce, Labor and Economic Development", 0),
            ("Hearing: Tuesday, January 24, 2023, 1:30 PM Room 346-S", 1),
            ("Hearing: Tuesday, January 24, 2023 - CANCELED", 2),
            ("Committee Report recommending bill be passed as amended by Committee on Education", 3),
            ("Approved by Governor on Wednesday, April 5, 2023", 4),
            ("Enrolled and presented to Governor on Monday, April 3, 2023", 5),
            ("Final Action - Passed as amended; Yea: 120 Nay: 2", 6),
            ("Committee Report recommending substitute bill be passed", 3),
            ("Committee of the Whole - Substitute bill be passed", 7),
            ("Committee of the Whole - Be passed", 8),
            ("Committee of the Whole - Passed over and retain a place on the calendar", 9),
            ("Stricken from General Orders", 10),
            ("Introduced", 11),
            ("Stricken from Calendar by Rule 1507", 12),
            ("Prefiled for Introduction on Friday, January 6, 2023", 13),
            ("Received and Introduced", 14),
            ("Motion to Amend - Offered by Representative Smith", 15),
            ("Committee of the Whole - Amendment by Senator Doe was adopted", 16),
            ("Committee of the Whole - Amendment by Senator Doe was rejected", 17),
            ("Committee of the Whole - Committee Report be adopted", 18),
            ("Engrossed on Thursday, March 23, 2023", 19),
            ("Amendment was ruled not germane", 20),
            ("Withdrawn from Committee on Taxation; ", 21),
            ("Motion to place on consent calendar passed", 22),
            ("Motion to rerefer to Committee on Judiciary passed", 23),
            ("Motion to rerefer to Committee on Judiciary failed", 24),
            ("Nonconcurred with amendments; Conference Committee requested", 25),
        ];
        let tax = Taxonomy::kansas();
        assert_eq!(tax.len(), 26);
        for (text, want) in samples {
            assert_eq!(tax.rule_index(text), Some(want), "{text}");
            assert!(!tax.classify(text).is_empty(), "{text}");
        }
    }

    #[test]
    fn case_rules() {
        // "Hearing" is case-sensitive
        assert_eq!(classify("hearing scheduled"), "");
        // exact matches do not fold case or trim
        assert_eq!(classify("introduced"), "");
        assert_eq!(classify("Introduced "), "");
        // case-insensitive substring
        assert_eq!(classify("ENGROSSED"), ENGROSSED);
        // case-sensitive substring
        assert_eq!(classify("committee of the whole - be passed"), "");
    }

    #[test]
    fn loads_alternate_table_from_json() {
        let json = r#"[
            { "category": "Tabled", "when": { "contains": "TABLED" } },
            { "category": "Signed",
              "when": { "all": [ { "contains_cs": "Signed" }, { "not": { "any": [ { "exact": "Signed?" }, { "contains": "veto" } ] } } ] } }
        ]"#;
        let tax = Taxonomy::from_json(json).unwrap();
        assert_eq!(tax.len(), 2);
        assert_eq!(tax.version(), UNVERSIONED);
        assert_eq!(tax.classify("Motion tabled"), "Tabled");
        assert_eq!(tax.classify("Signed by the Speaker"), "Signed");
        assert_eq!(tax.classify("Signed?"), "");
        assert_eq!(tax.classify("Signed despite VETO threat"), "");
        assert_eq!(tax.classify("Introduced"), "");
    }

    #[test]
    fn rejects_unknown_condition() {
        let json = r#"[{ "category": "X", "when": { "regex": "a+" } }]"#;
        assert!(Taxonomy::from_json(json).is_err());
    }

    #[test]
    fn versioned_file_keeps_its_version() {
        let json = r#"{ "version": "ks-2025_26.1",
                        "rules": [ { "category": "Tabled", "when": { "contains": "tabled" } } ] }"#;
        let tax = Taxonomy::from_json(json).unwrap();
        assert_eq!(tax.version(), "ks-2025_26.1");
        assert_eq!(tax.classify("Motion TABLED"), "Tabled");
    }

    #[test]
    fn builtin_table_survives_json_round_trip() {
        let tax = Taxonomy::kansas();
        assert_eq!(tax.version(), KANSAS_TAXONOMY_VERSION);
        let back = Taxonomy::from_json(&tax.to_json().unwrap()).unwrap();
        assert_eq!(back, tax);
    }
}
