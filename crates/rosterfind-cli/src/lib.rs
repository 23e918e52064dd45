//! rosterfind-cli
//! ==============
//!
//! Command-line interface for the `rosterfind-core` ordered-probe search
//! engine.
//!
//! This crate primarily provides a binary (`rosterfind`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! rosterfind --help
//! rosterfind --url https://roster.example/lookup find احمد علي
//! rosterfind --url https://roster.example/lookup audit --samples 60
//! rosterfind compare "احمد علي" "باسم عمر"
//! ```
//!
//! For programmatic access to the collator, matcher, and search engine,
//! use the [`rosterfind-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
