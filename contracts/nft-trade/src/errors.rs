//! Typed error handling for the trade contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message — same on-wire behaviour as raw panics, but with
//! structured, testable codes.

use near_sdk::json_types::U128;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum MarketError {
    /// A listing already exists for the derived key.
    AlreadyListed,
    /// The listing has already settled; there is no second sale.
    AlreadySold,
    /// Attached deposit does not equal the listing price.
    PriceMismatch { expected: U128, paid: U128 },
    /// Requested entity does not exist.
    NotFound(String),
    /// Enumeration index is past the end of the key index.
    OutOfRange { index: u64, len: u64 },
    /// Caller lacks permission (wrong owner, paused contract, self-purchase).
    Unauthorized(String),
    /// Invalid parameters or data from the caller.
    InvalidInput(String),
    /// Attached deposit is too low.
    InsufficientDeposit(String),
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyListed => write!(f, "NFT already listed"),
            Self::AlreadySold => write!(f, "NFT already sold"),
            Self::PriceMismatch { expected, paid } => {
                write!(f, "Price mismatch: expected {}, paid {}", expected.0, paid.0)
            }
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::OutOfRange { index, len } => {
                write!(f, "Index {} out of range (length {})", index, len)
            }
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketError {
    pub fn listing_not_found() -> Self {
        Self::NotFound("No listing found".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn paused() -> Self {
        Self::Unauthorized("Contract is paused".into())
    }
}
