//! Listing creation. There is no delisting, price edit, or re-listing after
//! sale; a key, once inserted, stays in the registry forever.

use crate::*;

#[near]
impl Contract {
    /// List an NFT for sale at a fixed price. Returns the derived listing key.
    ///
    /// Panics if attached deposit < 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn list_nft(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        available: bool,
        media_url: String,
        description: String,
    ) -> Result<String, MarketError> {
        internal::check_at_least_one_yocto()?;
        self.check_not_paused()?;

        if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Token ID must be 1..={} characters",
                MAX_TOKEN_ID_LEN
            )));
        }
        if media_url.len() > MAX_MEDIA_URL_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Media URL too long (max {} characters)",
                MAX_MEDIA_URL_LEN
            )));
        }
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(MarketError::InvalidInput(format!(
                "Description too long (max {} characters)",
                MAX_DESCRIPTION_LEN
            )));
        }
        if price.0 == 0 {
            return Err(MarketError::InvalidInput(
                "Price must be greater than 0".into(),
            ));
        }

        let seller = env::predecessor_account_id();
        let key = Contract::make_listing_key(&nft_contract_id, &token_id);

        // Check-and-insert happens within this single call, so uniqueness
        // holds without further coordination.
        if self.listings.contains_key(&key) {
            return Err(MarketError::AlreadyListed);
        }

        let listing = Listing {
            nft_contract_id: nft_contract_id.clone(),
            token_id: token_id.clone(),
            seller: seller.clone(),
            price,
            available,
            media_url,
            description,
            status: ListingStatus::Open,
            buyer: None,
            listed_at: env::block_timestamp(),
            sold_at: None,
        };

        self.listings.insert(key.clone(), listing);
        self.listing_keys.push(key.clone());

        events::emit_listing_created(&seller, &nft_contract_id, &token_id, &key, price, available);
        Ok(key)
    }
}
