//! `iss` - local-first issue tracker
//!
//! Loads issues from a flat `|`-separated file, keeps edits in a local JSON
//! slot, and lists them through shareable search/status/sort views.

use issues_rs::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
