//! Acquisition of the raw corpus from one RSS feed.
//!
//! Acquisition runs in three steps:
//!
//! 1. **Feed**: read the first candidate endpoint that yields items ([`feed`])
//! 2. **Article**: fetch each item's page and extract body, byline and date ([`article`])
//! 3. **Collect**: dedupe urls, apply the quality gate and the article cap ([`collect`])
//!
//! | Module | Role | Failure handling |
//! |--------|------|------------------|
//! | [`http`] | Shared `reqwest` client | Non-2xx statuses become errors |
//! | [`feed`] | RSS parsing with endpoint fallback | Next endpoint; fatal only when all fail |
//! | [`article`] | Selector cascades over the page | Caller skips the item |
//! | [`collect`] | Sequential loop with politeness delay | Skips never count towards the cap |

pub mod article;
pub mod collect;
pub mod feed;
pub mod http;
