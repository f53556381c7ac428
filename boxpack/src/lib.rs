//! Greedy packing of small integer-sized items into fixed-capacity bins.
//!
//! The crate offers three alternative heuristics ([`strategy`]) which all consume the same
//! list of [`Item`](entities::Item)s and produce a sequence of [`Bin`](entities::Bin)s.
//! [`PackingEngine`](engine::PackingEngine) runs them over a private copy of the input.

/// Entities to model packing problems: items and bins
pub mod entities;

/// Runs strategies and bundles their output into solutions
pub mod engine;

/// The packing heuristics
pub mod strategy;

/// Importing items, exporting solutions and textual reports
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
