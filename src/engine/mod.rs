// src/engine/mod.rs
//! Pure transformation core: no I/O, no DOM. Everything here works on
//! strings and rows already lifted out of the page by `specs`.

pub mod history;
pub mod meta;
pub mod taxonomy;
pub mod types;
pub mod votes;

pub use history::{HistoryRow, HistoryTableParser, detect_vote_link};
pub use meta::BillMetadataAggregator;
pub use taxonomy::{Condition, Rule, Taxonomy, classify};
pub use types::{ActionRecord, BillCounters, BillHistory, BillMeta, VoteGroup, VoteRecord};
pub use votes::{VoteContext, tokenize};
