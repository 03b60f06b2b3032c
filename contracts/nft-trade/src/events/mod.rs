//! Structured JSON events (`EVENT_JSON:` log prefix) for indexers.

mod builder;
mod market;
mod types;

pub(crate) use market::*;

pub(crate) const PREFIX: &str = "EVENT_JSON:";
pub(crate) const STANDARD: &str = "nft-trade";
pub(crate) const VERSION: &str = "1.0.0";

/// Event type for all marketplace operations.
pub(crate) const MARKET: &str = "market";
