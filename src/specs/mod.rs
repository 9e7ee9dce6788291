// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction for the legislature site. Each spec covers a
//! single page kind and encodes *where the ground truth lives in the HTML*
//! and *how to lift it out* into plain rows and strings.
//!
//! ## What lives here
//! - **DOM reading** for remote pages (bill list, bill page, vote page,
//!   member list, member page), always through the `core::html` façade.
//! - **Selector choice**: ids and classes the site uses (`history-tab*`,
//!   `truncated_text`, `module-title`, `main_content`, `#main`, `#sidebar`).
//! - **Light shaping** into small structs (`BillListing`, `HistoryPage`,
//!   `Legislator`) that the rest of the pipeline consumes.
//!
//! ## What does **not** live here
//! - **Fetching**: specs take an already-parsed `Document`. `scrape::collect_*`
//!   decides what to fetch and when.
//! - **Classification, counting, vote tokenizing**: that is `engine`, which
//!   never sees a DOM node.
//! - **Writing files**: `runner` + `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_* → Fetch::fetch → Document::parse
//!                            ↘ specs::<page>::parse_* → engine::*
//! ```
//!
//! ## Conventions
//! - A missing optional node yields an empty field, not an error.
//! - Keep selectors resilient to whitespace and harmless markup noise.
//! - Every spec is testable **offline** against inline HTML fixtures.
//!
//! In short: **`specs` knows how to read the pages.** Other layers decide when
//! to scrape, what to compute, and where it ends up.
pub mod bills;
pub mod history;
pub mod legislators;
pub mod votes;
