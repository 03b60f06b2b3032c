// Internal helper functions for the trade contract

use crate::*;

impl Contract {
    /// Deterministic listing key: sha256 hex of `"{collection}:{token_id}"`.
    pub(crate) fn make_listing_key(nft_contract_id: &AccountId, token_id: &str) -> String {
        let preimage = format!("{}{}{}", nft_contract_id, DELIMETER, token_id);
        hex::encode(env::sha256(preimage.as_bytes()))
    }

    pub(crate) fn check_contract_owner(&self, account_id: &AccountId) -> Result<(), MarketError> {
        if account_id != &self.owner_id {
            return Err(MarketError::only_owner("the contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_not_paused(&self) -> Result<(), MarketError> {
        if self.paused {
            return Err(MarketError::paused());
        }
        Ok(())
    }

    pub(crate) fn internal_get_listing(&self, key: &str) -> Result<&Listing, MarketError> {
        self.listings
            .get(key)
            .ok_or_else(MarketError::listing_not_found)
    }
}

/// Check exactly one yoctoNEAR is attached (security measure)
pub(crate) fn check_one_yocto() -> Result<(), MarketError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Check at least one yoctoNEAR is attached
pub(crate) fn check_at_least_one_yocto() -> Result<(), MarketError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(MarketError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}
