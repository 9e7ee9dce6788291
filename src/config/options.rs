// src/config/options.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BillSelector {
    All,
    Codes(Vec<String>),
}

impl BillSelector {
    /// Codes compare case-insensitively ("hb2001" selects "HB2001").
    pub fn matches(&self, code: &str) -> bool {
        match self {
            BillSelector::All => true,
            BillSelector::Codes(v) => v.iter().any(|c| c.eq_ignore_ascii_case(code)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub session: String,
    pub bills: BillSelector,
    pub limit: Option<usize>,
    pub votes: bool,
    pub legislators: bool,
    pub taxonomy: Option<PathBuf>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            session: s!(DEFAULT_SESSION),
            bills: BillSelector::All,
            limit: None,
            votes: true,
            legislators: false,
            taxonomy: None,
        }
    }
}

impl ScrapeOptions {
    pub fn session_root(&self) -> String {
        join!(self.session.trim_matches('/'), "/")
    }
    pub fn bills_path(&self) -> String {
        join!(&self.session_root(), BILLS_PATH)
    }
    pub fn members_path(&self) -> String {
        join!(&self.session_root(), MEMBERS_PATH)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem>_<YYYY-MM-DD>.<ext>`
    pub fn out_path(&self, stem: &str, date: NaiveDate) -> PathBuf {
        let name = format!("{stem}_{}.{}", date.format("%Y-%m-%d"), self.format.ext());
        self.out_dir.join(name)
    }
}
