#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers used across slider integration suites.
//! Layout: fixtures.rs (recording surface + tracing setup), clock.rs (manual timer driver).

pub mod clock;
pub mod fixtures;
