//! Newsstand Types - Canonical wire and domain types for the content marketplace
//!
//! This crate contains all foundational types for newsstand with zero
//! dependencies on other newsstand crates. It defines:
//!
//! - Discovery types (the marketplace catalog and its items)
//! - Purchase types (request, receipt, delivered content)
//! - Analysis types (the keyword report over purchased text)
//!
//! All wire types mirror the marketplace's JSON API: field names are
//! camelCase on the wire, prices are decimal strings or numbers (the service
//! emits both), and fields the service may omit are modeled as `Option`.

pub mod analysis;
pub mod catalog;
pub mod purchase;

pub use analysis::*;
pub use catalog::*;
pub use purchase::*;
