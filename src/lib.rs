//! rulesort - sort AdGuard/uBlock filter-list rules by their underlying
//! content
//!
//! This library provides the core transform: strip leading syntax markers
//! (`*`, `||`, `@@||`, `@@`) to derive a sort key, then stable-sort the
//! non-empty lines of a rule list by that key, case-insensitively. Comment
//! lines (`!`) sort by their own literal text.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod output;
pub mod sorter;
