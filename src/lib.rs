//! Deterministic recommendation engine for curated datasets.
//!
//! `recommend-core` ranks recipes against the ingredients a user has on hand
//! and assembles fixed-length trip itineraries from curated destination days.
//! Scoring is pure: identical catalogs and queries always produce identical
//! output, in the same order.

pub mod catalog;
pub mod config;
pub mod itinerary;
pub mod matching;
pub mod selection;
pub mod types;
