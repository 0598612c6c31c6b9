//! Human-readable names for Wikimedia database names and dump dates.
//!
//! Database names like `enwiki` or `nlwikimedia` are classified by their
//! suffix, then turned into display names like “English Wikipedia” or
//! “Wikimedia Netherlands” using a handful of curated tables plus the language
//! list published by the sitematrix API. Names which cannot be resolved are
//! passed through unchanged and flagged so that callers can record them for
//! triage instead of aborting a batch.

pub mod classify;
pub mod config;
pub mod date;
pub mod langlist;
pub mod resolve;
mod tables;
pub mod triage;

pub use crate::classify::{Classification, SiteCategory, classify};
pub use crate::date::{DateError, convert_date};
pub use crate::langlist::{Freshness, LanguageCache, LanguageTable, SiteMatrix};
pub use crate::resolve::{LanguageSource, Resolution, normalize_language, resolve, site_name};
pub use crate::triage::ProblemLog;
