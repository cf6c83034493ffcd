// src/runner.rs
//
// fetch → extract → save, once, in order. Each stage short-circuits the
// rest when it comes back empty.

use crate::{
    config::AppOptions,
    core::net,
    error::FetchError,
    file::{self, SaveOutcome},
    progress::Progress,
    record::Record,
    specs::quotes,
};

/// Summary of what one run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Set when the fetch failed; extraction and saving were skipped.
    pub fetch_error: Option<FetchError>,
    pub records: usize,
    pub save: SaveOutcome,
}

impl RunSummary {
    fn fetch_failed(e: FetchError) -> Self {
        Self { fetch_error: Some(e), records: 0, save: SaveOutcome::NothingToSave }
    }

    /// Whether the page came back; `false` means nothing else ran.
    pub fn fetched(&self) -> bool { self.fetch_error.is_none() }

    /// One closing line for the console.
    pub fn headline(&self) -> String {
        match (&self.fetch_error, &self.save) {
            (Some(_), _) => s!("Could not fetch the page"),
            (None, SaveOutcome::Saved { path, rows }) => {
                format!("{rows} records saved to {}", path.display())
            }
            (None, SaveOutcome::NothingToSave) => s!("No records extracted"),
            (None, SaveOutcome::Failed(_)) => {
                format!("{} records extracted but not saved", self.records)
            }
        }
    }
}

/// Run the whole job. Never fails; every problem is reported on `progress`
/// and reflected in the summary.
pub fn run(opts: &AppOptions, progress: &mut dyn Progress) -> RunSummary {
    progress.log("Starting quote scraper");

    progress.stage("Fetch");
    let page = match net::fetch_page(&opts.fetch, progress) {
        Ok(page) => page,
        Err(e) => {
            progress.log("No page content; skipping extraction");
            progress.log("Done.");
            return RunSummary::fetch_failed(e);
        }
    };

    progress.stage("Extract");
    let records = quotes::extract(Some(&page), &opts.items, progress);
    drop(page);

    let save = if records.is_empty() {
        progress.log("No records could be extracted from the page");
        SaveOutcome::NothingToSave
    } else {
        list_records(&records, progress);
        progress.stage("Save");
        file::save_records(&opts.export, &records, progress)
    };

    progress.log("Done.");
    RunSummary { fetch_error: None, records: records.len(), save }
}

/// Numbered listing of what was extracted, one line per field.
fn list_records(records: &[Record], progress: &mut dyn Progress) {
    progress.log(&format!("Found {} quotes", records.len()));
    for (i, rec) in records.iter().enumerate() {
        progress.log(&format!("#{}", i + 1));
        for (name, value) in rec.field_names().iter().zip(rec.values()) {
            progress.log(&format!("  {name}: {value}"));
        }
    }
}
