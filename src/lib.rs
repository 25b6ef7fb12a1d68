//! SAW Ranker - Multi-criteria decision support with Simple Additive Weighting
//!
//! This crate ranks a finite set of alternatives against weighted benefit and
//! cost criteria. The pure engine lives in `domain::analysis`; the rest of the
//! crate collects input over HTTP, caches the latest evaluation, and exports
//! rankings as CSV.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
