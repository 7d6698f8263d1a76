//! Integration tests for look crates.
//!
//! End-to-end checks from adjustment documents through the pipeline to
//! `.cube` text, plus golden hashes of compiled output.

#[cfg(test)]
mod golden;
