// src/runner.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    config::{
        consts::{ACTIONS_STEM, LEGISLATORS_STEM, META_STEM, REGISTER_STEM, VOTES_STEM},
        options::{AppOptions, ExportOptions},
    },
    core::Fetch,
    engine::{ActionRecord, BillMetadataAggregator, Taxonomy},
    error::Result,
    file::write_dataset,
    progress::Progress,
    scrape,
    store::{DataSet, Tabular},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Version of the rule table the actions were classified with.
    pub taxonomy_version: String,
    pub bills_listed: usize,
    pub bills_parsed: usize,
    /// `(bill_code, reason)` for every bill whose history could not be parsed.
    pub bills_skipped: Vec<(String, String)>,
    pub actions: usize,
    pub metadata_rows: usize,
    pub votes: usize,
    pub legislators: usize,
}

/// Writes one record set to `<out_dir>/<stem>_<date>.<ext>`.
fn export<R: Tabular>(
    export: &ExportOptions,
    stem: &str,
    date: NaiveDate,
    records: &[R],
    summary: &mut RunSummary,
) -> Result<()> {
    let path = export.out_path(stem, date);
    write_dataset(&path, &DataSet::from_records(records), export.format.delim())?;
    logf!("Wrote {} ({} rows)", path.display(), records.len());
    summary.files_written.push(path);
    Ok(())
}

/// Top-level runner: register → histories → metadata → votes → legislators.
/// `refresh_date` stamps both the metadata rows and the output file names.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    fetch: &dyn Fetch,
    refresh_date: NaiveDate,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let scrape_opts = &opts.scrape;
    let export_opts = &opts.export;
    let mut summary = RunSummary::default();

    let taxonomy = match &scrape_opts.taxonomy {
        Some(path) => Taxonomy::from_path(path)?,
        None => Taxonomy::kansas(),
    };
    logf!("Taxonomy {} ({} rules)", taxonomy.version(), taxonomy.len());
    if taxonomy.is_empty() {
        logw!("Taxonomy has no rules; every action will be unclassified");
    }
    summary.taxonomy_version = s!(taxonomy.version());

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching bill register…");
    }
    let register = scrape::collect_register(fetch, scrape_opts)?;
    summary.bills_listed = register.len();
    export(export_opts, REGISTER_STEM, refresh_date, &register, &mut summary)?;

    let selected = scrape::select_bills(&register, scrape_opts);
    if selected.is_empty() {
        logw!("No bills to process (after filtering).");
    }

    let batch = scrape::collect_histories(fetch, scrape_opts, &selected, &taxonomy, progress.as_deref_mut())?;
    summary.bills_parsed = batch.histories.len();
    summary.bills_skipped = batch.skipped;

    let actions: Vec<ActionRecord> = batch.histories.iter().flat_map(|h| h.actions.iter().cloned()).collect();
    summary.actions = actions.len();
    export(export_opts, ACTIONS_STEM, refresh_date, &actions, &mut summary)?;

    let metas = BillMetadataAggregator::new(refresh_date).aggregate_all(&batch.histories);
    summary.metadata_rows = metas.len();
    export(export_opts, META_STEM, refresh_date, &metas, &mut summary)?;

    if scrape_opts.votes {
        let votes = scrape::collect_votes(fetch, scrape_opts, &batch.histories, progress.as_deref_mut())?;
        summary.votes = votes.len();
        export(export_opts, VOTES_STEM, refresh_date, &votes, &mut summary)?;
    }

    if scrape_opts.legislators {
        let legislators = scrape::collect_legislators(fetch, scrape_opts, progress.as_deref_mut())?;
        summary.legislators = legislators.len();
        export(export_opts, LEGISLATORS_STEM, refresh_date, &legislators, &mut summary)?;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
