use near_sdk::json_types::U128;
use near_sdk::serde::de::Error as _;
use near_sdk::serde::{Deserialize, Deserializer, Serialize, Serializer};
use near_sdk::{near, AccountId};

// --- Enums ---

/// Listing lifecycle. `Open → Sold` is the only transition; listings are
/// never deleted or re-opened.
///
/// Serialized over JSON as the integer the indexer and UI consume:
/// `0 = Open`, `1 = Sold`.
#[near(serializers = [borsh])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Open,
    Sold,
}

impl Serialize for ListingStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for ListingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(Self::Open),
            1 => Ok(Self::Sold),
            other => Err(D::Error::custom(format!("invalid listing status {}", other))),
        }
    }
}

// --- Structs ---

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Listing {
    /// Collection contract the token belongs to.
    pub nft_contract_id: AccountId,
    pub token_id: String,
    /// Predecessor at list time; receives the settlement.
    pub seller: AccountId,
    /// yoctoNEAR. Immutable after creation.
    pub price: U128,
    /// Availability flag captured at creation.
    pub available: bool,
    pub media_url: String,
    pub description: String,
    pub status: ListingStatus,
    /// None while `Open`; set exactly once on sale.
    pub buyer: Option<AccountId>,
    /// Nanosecond block timestamp of creation.
    pub listed_at: u64,
    #[serde(default)]
    pub sold_at: Option<u64>,
}
