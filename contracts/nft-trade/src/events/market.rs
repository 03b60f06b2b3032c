use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::MARKET;

pub(crate) fn emit_listing_created(
    seller: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    key: &str,
    price: U128,
    available: bool,
) {
    EventBuilder::new(MARKET, "list", seller)
        .field("seller", seller)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("key", key)
        .field("price", price)
        .field("available", available)
        .emit();
}

pub(crate) fn emit_listing_sold(
    buyer: &AccountId,
    seller: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    key: &str,
    price: U128,
) {
    EventBuilder::new(MARKET, "purchase", buyer)
        .field("buyer", buyer)
        .field("seller", seller)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("key", key)
        .field("price", price)
        .emit();
}

pub(crate) fn emit_contract_paused(owner_id: &AccountId) {
    EventBuilder::new(MARKET, "pause", owner_id).emit();
}

pub(crate) fn emit_contract_unpaused(owner_id: &AccountId) {
    EventBuilder::new(MARKET, "unpause", owner_id).emit();
}

pub(crate) fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(MARKET, "transfer_ownership", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}
