//! Fetch progress spinner
//!
//! Shows which catalog page is in flight and how many products have been
//! collected. Everything goes to stderr so stdout stays free for piping.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::tco::pagination::PageSelection;

/// Start the spinner for a fetch run over `selection`
///
/// Returns `None` in quiet (batch) mode; every other helper here accepts
/// the `None` and does nothing.
pub fn create_fetch_spinner(selection: &PageSelection, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.green} [{elapsed}] {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {}...", selection));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

fn page_message(page: u32, collected: usize) -> String {
    match collected {
        0 => format!("Fetching page {}...", page),
        n => format!("Fetching page {} ({} products so far)...", page, n),
    }
}

/// Show the page now being requested
pub fn show_page(spinner: Option<&ProgressBar>, page: u32, collected: usize) {
    if let Some(s) = spinner {
        s.set_message(page_message(page, collected));
    }
}

/// Print a line to stderr without tearing the spinner
pub fn notify(spinner: Option<&ProgressBar>, message: &str) {
    match spinner {
        Some(s) => s.suspend(|| eprintln!("{}", message)),
        None => eprintln!("{}", message),
    }
}

fn finish_message(products: usize, aborted: bool) -> String {
    if aborted {
        format!("Stopped early with {} product(s)", products)
    } else {
        format!("Fetched {} product(s)", products)
    }
}

/// Stop the spinner and leave the product count on screen
pub fn finish_fetch_spinner(spinner: Option<ProgressBar>, products: usize, aborted: bool) {
    if let Some(s) = spinner {
        s.finish_with_message(finish_message(products, aborted));
    }
}
