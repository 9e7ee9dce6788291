// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://kslegislature.org";
pub const DEFAULT_SESSION: &str = "li/b2023_24";
pub const BILLS_PATH: &str = "measures/bills/";
pub const MEMBERS_PATH: &str = "members/";
pub const USER_AGENT: &str = concat!("leg_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Page structure
pub const HISTORY_TABLE_ID_PREFIX: &str = "history-tab";
pub const DESCRIPTION_CLASS: &str = "truncated_text";
pub const LISTING_CLASS: &str = "module-title";
pub const VOTE_CONTENT_ID: &str = "main_content";
pub const VOTE_LINK_MARKER: &str = "vote_view";

// Parse
pub const HISTORY_DATE_FORMAT: &str = "%a, %b %d, %Y";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const REGISTER_STEM: &str = "bill_register";
pub const ACTIONS_STEM: &str = "legislative_actions";
pub const META_STEM: &str = "bill_metadata";
pub const VOTES_STEM: &str = "ks_legislative_votes";
pub const LEGISLATORS_STEM: &str = "ks_legislators";
