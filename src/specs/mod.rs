// src/specs/mod.rs
//! # Source specs
//!
//! Where the raw politician data comes from, and how to read it.
//!
//! - `roster` – the current-legislators feed: one GET, one JSON array. A
//!   failed request or a body that isn't an array is fatal; a single element
//!   that doesn't decode is logged and skipped.
//! - `governors` – a short hand-maintained list. Never fetched.
//!
//! Specs only read sources. Filtering, image handling and output belong to
//! `builder`, `store` and `file`.
pub mod governors;
pub mod roster;

use crate::model::{Governor, Legislator};

/// Everything the builder consumes, in source order.
#[derive(Clone, Debug, Default)]
pub struct Sources {
    pub legislators: Vec<Legislator>,
    pub governors: Vec<Governor>,
    /// Roster elements dropped because they didn't decode.
    pub malformed: usize,
}
