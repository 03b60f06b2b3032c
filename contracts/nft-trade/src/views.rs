// View/enumeration methods for querying listings

use crate::*;

#[near]
impl Contract {
    /// Derive the listing key for a collection/token pair without touching state.
    pub fn listing_key(&self, nft_contract_id: AccountId, token_id: String) -> String {
        Contract::make_listing_key(&nft_contract_id, &token_id)
    }

    /// Get a listing by collection contract and token ID.
    #[handle_result]
    pub fn get_listing(
        &self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<ListingView, MarketError> {
        let key = Contract::make_listing_key(&nft_contract_id, &token_id);
        let listing = self.internal_get_listing(&key)?;
        Ok(listing_view(key, listing))
    }

    /// Get a listing by its derived key.
    pub fn get_listing_by_key(&self, key: String) -> Option<ListingView> {
        let listing = self.listings.get(&key)?;
        Some(listing_view(key, listing))
    }

    /// Number of listings ever inserted.
    pub fn listing_count(&self) -> u64 {
        self.listing_keys.len() as u64
    }

    /// Key at `index` in insertion order.
    #[handle_result]
    pub fn key_at(&self, index: u64) -> Result<String, MarketError> {
        let len = self.listing_keys.len() as u64;
        if index >= len {
            return Err(MarketError::OutOfRange { index, len });
        }
        self.listing_keys
            .get(index as u32)
            .cloned()
            .ok_or(MarketError::OutOfRange { index, len })
    }

    /// Paginated listings in insertion order.
    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<ListingView> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100); // Max 100 per query

        self.listing_keys
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .filter_map(|key| {
                self.listings
                    .get(key)
                    .map(|listing| listing_view(key.clone(), listing))
            })
            .collect()
    }
}

fn listing_view(key: String, listing: &Listing) -> ListingView {
    ListingView {
        key,
        nft_contract_id: listing.nft_contract_id.clone(),
        token_id: listing.token_id.clone(),
        seller: listing.seller.clone(),
        price: listing.price,
        available: listing.available,
        media_url: listing.media_url.clone(),
        description: listing.description.clone(),
        status: listing.status,
        buyer: listing.buyer.clone(),
        listed_at: listing.listed_at,
        sold_at: listing.sold_at,
    }
}

/// Read-only listing information returned by views.
#[near(serializers = [json])]
#[derive(Debug)]
pub struct ListingView {
    pub key: String,
    pub nft_contract_id: AccountId,
    pub token_id: String,
    pub seller: AccountId,
    pub price: U128,
    pub available: bool,
    pub media_url: String,
    pub description: String,
    pub status: ListingStatus,
    pub buyer: Option<AccountId>,
    pub listed_at: u64,
    pub sold_at: Option<u64>,
}
