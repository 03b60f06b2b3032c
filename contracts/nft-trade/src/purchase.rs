//! Purchase and settlement.

use crate::*;

#[near]
impl Contract {
    /// Buy an open listing. The attached deposit must equal the listing
    /// price exactly; the full amount is released to the seller.
    ///
    /// The status read-modify-write completes before the settlement promise
    /// is created, and NEAR serializes calls against the contract, so the
    /// `Open → Sold` transition is atomic and exactly-once. On any `Err` the
    /// SDK panics, the receipt reverts, and the deposit returns to the buyer.
    #[payable]
    #[handle_result]
    pub fn buy_nft(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketError> {
        self.check_not_paused()?;

        let buyer = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        let key = Contract::make_listing_key(&nft_contract_id, &token_id);

        let listing = self
            .listings
            .get_mut(&key)
            .ok_or_else(MarketError::listing_not_found)?;

        if listing.status != ListingStatus::Open {
            return Err(MarketError::AlreadySold);
        }
        if deposit != listing.price.0 {
            return Err(MarketError::PriceMismatch {
                expected: listing.price,
                paid: U128(deposit),
            });
        }
        if buyer == listing.seller {
            return Err(MarketError::Unauthorized(
                "Cannot purchase your own listing".into(),
            ));
        }

        listing.status = ListingStatus::Sold;
        listing.buyer = Some(buyer.clone());
        listing.sold_at = Some(env::block_timestamp());

        let seller = listing.seller.clone();
        let price = listing.price;

        let _ = Promise::new(seller.clone()).transfer(NearToken::from_yoctonear(price.0));

        events::emit_listing_sold(&buyer, &seller, &nft_contract_id, &token_id, &key, price);
        Ok(())
    }
}
