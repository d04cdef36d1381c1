//! # Orchard Archive Utilities
//!
//! File: cli/src/common/archive/mod.rs
//!
//! Reading gzipped tarballs. The self-updater uses `tar::extract_file` to pull
//! the `orchard` binary out of a downloaded release archive.
//!

pub mod tar;
