// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;

use crate::config::consts::{BASE_URL, DEFAULT_OUT_DIR, DEFAULT_SESSION};
use crate::config::options::{AppOptions, BillSelector, ExportFormat, ExportOptions, ScrapeOptions};
use crate::core::HttpFetcher;
use crate::log::DEFAULT_LOG_FILE;
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Tsv,
}

/// Scrape Kansas Legislature bill histories, roll-call votes and member bios into CSV.
#[derive(Debug, Parser)]
#[command(name = "leg_scrape", version, about)]
struct Args {
    /// Session path under the site root
    #[arg(long, default_value = DEFAULT_SESSION)]
    session: String,

    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Only these bill codes (comma separated, case-insensitive)
    #[arg(long, value_delimiter = ',')]
    bills: Vec<String>,

    /// Process at most N bills (after --bills)
    #[arg(long)]
    limit: Option<usize>,

    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Skip fetching vote pages
    #[arg(long)]
    no_votes: bool,

    /// Also scrape legislator bios
    #[arg(long)]
    legislators: bool,

    /// Replacement action taxonomy (JSON rule list)
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    /// Also log to a file
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_options(self) -> AppOptions {
        let bills = if self.bills.is_empty() {
            BillSelector::All
        } else {
            BillSelector::Codes(self.bills.into_iter().map(|b| s!(b.trim())).collect())
        };
        AppOptions {
            scrape: ScrapeOptions {
                base_url: self.base_url,
                session: self.session,
                bills,
                limit: self.limit,
                votes: !self.no_votes,
                legislators: self.legislators,
                taxonomy: self.taxonomy,
            },
            export: ExportOptions {
                format: match self.format {
                    Format::Csv => ExportFormat::Csv,
                    Format::Tsv => ExportFormat::Tsv,
                },
                out_dir: self.out_dir,
            },
        }
    }
}

/// Prints stage starts and skips to stderr; per-item ticks only in verbose mode.
struct StderrProgress {
    verbose: bool,
    stage: String,
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, stage: &str, total: usize) {
        self.stage = s!(stage);
        self.total = total;
        self.done = 0;
        eprintln!("[{stage}] {total} to fetch");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, id: &str) {
        self.done += 1;
        if self.verbose {
            eprintln!("[{}] {}/{} {id}", self.stage, self.done, self.total);
        }
    }

    fn item_failed(&mut self, id: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}] skipped {id}: {reason}", self.stage);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref()).wrap_err("cannot open log file")?;

    let verbose = args.verbose;
    let opts = args.into_options();
    let fetcher = HttpFetcher::new()?;
    let today = chrono::Local::now().date_naive();

    let mut progress = StderrProgress { verbose, stage: s!(), total: 0, done: 0 };
    let summary = crate::runner::run(&opts, &fetcher, today, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("{}", path.display());
    }
    eprintln!(
        "{} bills listed, {} parsed, {} skipped; {} actions, {} votes, {} legislators",
        summary.bills_listed,
        summary.bills_parsed,
        summary.bills_skipped.len(),
        summary.actions,
        summary.votes,
        summary.legislators,
    );
    Ok(())
}
