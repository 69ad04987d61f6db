#![allow(dead_code)]

pub mod cli;

/// Four issues with distinct timestamps. Newest first: 4, 2, 1, 3.
///
/// Four-field lines carry no timestamp, so timestamped lines without a
/// description end in `|`.
pub const SAMPLE_SOURCE: &str = "\
# id|title|status|updated|description
1|Login fails on Safari|open|2024-03-01T10:00:00Z|Users cannot log in
2|Add dark mode|in_progress|2024-03-05T09:30:00Z|
3|Crash on save|closed|2024-02-20T08:00:00Z|Fixed in 1.2
4|Login button misaligned|open|2024-03-10T12:00:00Z|
";
