//! UI utilities for terminal output
//!
//! Progress spinner shown while catalog pages are fetched.

mod spinner;

pub use spinner::{create_fetch_spinner, finish_fetch_spinner, notify, show_page};
