//! Normalization and classification of a collected corpus.
//!
//! Everything in here is a pure function of its input plus the static
//! configuration handed to [`pipeline::Analyzer::new`]:
//!
//! | Stage | Module |
//! |-------|--------|
//! | Whitespace, case and diacritic normalization, tokenization | [`normalize`] |
//! | Date canonicalization to `dd/mm/yyyy` | [`dates`] |
//! | Topic scoring and first-match country tagging | [`classify`] |
//! | Top-N counting with first-occurrence tie-break | [`aggregate`] |
//! | Per-article enrichment and corpus report | [`pipeline`] |

pub mod aggregate;
pub mod classify;
pub mod dates;
pub mod normalize;
pub mod pipeline;
