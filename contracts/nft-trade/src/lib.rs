//! NFT Trade — fixed-price listing registry with exactly-once settlement and JSON events.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, Vector};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod admin;
pub mod constants;
mod errors;
mod events;
mod internal;
mod listing;
mod purchase;
pub mod types;
mod views;


pub use constants::*;
pub use errors::MarketError;
pub use types::*;
pub use views::ListingView;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    ListingKeys,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    pub owner_id: AccountId,
    /// Blocks `list_nft` and `buy_nft` while set.
    pub paused: bool,

    /// Listing records; key = sha256 hex of `"{collection}:{token_id}"`.
    pub listings: IterableMap<String, Listing>,
    /// Insertion-ordered key index. Grows only: listings are never deleted,
    /// so its length is the number of listings ever inserted.
    pub listing_keys: Vector<String>,
}
