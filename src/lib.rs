//! chapter-site
//!
//! Bilingual (Spanish/English) site generator for a student organization
//! chapter: a translation dictionary, structured content records and bundled
//! images resolved into static pages.

pub mod assets;
pub mod config;
pub mod db;
pub mod diagnostics;
pub mod i18n;
pub mod input;
pub mod output;
pub mod pages;
pub mod resolve;
pub mod session;
pub mod types;

/// Shared fixtures for unit tests.
#[cfg(test)]
mod test_utils;

pub use session::SiteSession;
