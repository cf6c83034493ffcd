// src/bin/cli.rs
use quote_scrape::{config::AppOptions, logf, loge, progress::ConsoleProgress, runner};

// No arguments, flags or environment are read; every failure is reported
// and the process still exits 0.
fn main() {
    quote_scrape::log::init();
    if let Err(e) = color_eyre::install() {
        loge!("could not install error reporter: {e}");
    }

    let opts = AppOptions::default();
    let summary = runner::run(&opts, &mut ConsoleProgress);
    logf!("{}", summary.headline());
}
