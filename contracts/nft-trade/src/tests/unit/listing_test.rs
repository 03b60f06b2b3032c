use near_sdk::json_types::U128;
use near_sdk::test_utils::get_logs;

use crate::tests::test_utils::*;
use crate::*;

// --- list_nft ---

#[test]
fn list_adds_to_registry() {
    let mut contract = new_contract();

    let count_before = contract.listing_count();
    list_token(&mut contract, &seller(), "3", NFT_PRICE);
    assert_eq!(contract.listing_count(), count_before + 1);

    let listing = contract
        .get_listing(collection(), "3".to_string())
        .expect("listing should exist");
    assert_eq!(listing.seller, seller());
    assert_eq!(listing.price, U128(NFT_PRICE));
    assert_eq!(listing.status, ListingStatus::Open);
    assert!(listing.buyer.is_none());
    assert!(listing.available);
}

#[test]
fn list_returns_derived_key() {
    let mut contract = new_contract();

    let key = list_token(&mut contract, &seller(), "1", NFT_PRICE);
    assert_eq!(key, contract.listing_key(collection(), "1".to_string()));
    // sha256 hex
    assert_eq!(key.len(), 64);
}

#[test]
fn duplicate_list_fails_and_leaves_count_unchanged() {
    let mut contract = new_contract();
    list_token(&mut contract, &seller(), "2", NFT_PRICE);

    let count_before = contract.listing_count();
    set_caller(&seller(), 1);
    let err = contract
        .list_nft(
            collection(),
            "2".to_string(),
            U128(2 * NFT_PRICE),
            true,
            "https://cdn.example.com/media/2.png".to_string(),
            "Looks rare".to_string(),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::AlreadyListed));
    assert_eq!(contract.listing_count(), count_before);
}

#[test]
fn duplicate_list_by_other_account_fails() {
    let mut contract = new_contract();
    list_token(&mut contract, &seller(), "2", NFT_PRICE);

    set_caller(&buyer(), 1);
    let err = contract
        .list_nft(
            collection(),
            "2".to_string(),
            U128(NFT_PRICE),
            true,
            String::new(),
            String::new(),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::AlreadyListed));
}

#[test]
fn list_zero_price_fails() {
    let mut contract = new_contract();

    set_caller(&seller(), 1);
    let err = contract
        .list_nft(
            collection(),
            "1".to_string(),
            U128(0),
            true,
            String::new(),
            String::new(),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn list_empty_token_id_fails() {
    let mut contract = new_contract();

    set_caller(&seller(), 1);
    let err = contract
        .list_nft(
            collection(),
            String::new(),
            U128(NFT_PRICE),
            true,
            String::new(),
            String::new(),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn list_oversized_token_id_fails() {
    let mut contract = new_contract();

    set_caller(&seller(), 1);
    let err = contract
        .list_nft(
            collection(),
            "t".repeat(MAX_TOKEN_ID_LEN + 1),
            U128(NFT_PRICE),
            true,
            String::new(),
            String::new(),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn list_without_deposit_fails() {
    let mut contract = new_contract();

    set_caller(&seller(), 0);
    let err = contract
        .list_nft(
            collection(),
            "1".to_string(),
            U128(NFT_PRICE),
            true,
            String::new(),
            String::new(),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::InsufficientDeposit(_)));
}

#[test]
fn list_while_paused_fails() {
    let mut contract = new_contract();
    set_caller(&owner(), 1);
    contract.pause().unwrap();

    set_caller(&seller(), 1);
    let err = contract
        .list_nft(
            collection(),
            "1".to_string(),
            U128(NFT_PRICE),
            true,
            String::new(),
            String::new(),
        )
        .unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert_eq!(contract.listing_count(), 0);
}

#[test]
fn list_emits_event() {
    let mut contract = new_contract();
    list_token(&mut contract, &seller(), "1", NFT_PRICE);

    let logs = get_logs();
    let event = logs.last().expect("listing should log an event");
    assert!(event.starts_with("EVENT_JSON:"));
    assert!(event.contains("\"operation\":\"list\""));
    assert!(event.contains(&format!("\"price\":\"{}\"", NFT_PRICE)));
}

#[test]
fn unavailable_listing_is_stored_with_flag() {
    let mut contract = new_contract();

    set_caller(&seller(), 1);
    contract
        .list_nft(
            collection(),
            "3".to_string(),
            U128(2 * NFT_PRICE),
            false,
            "https://cdn.example.com/media/3.png".to_string(),
            "777 with hat".to_string(),
        )
        .unwrap();

    let listing = contract
        .get_listing(collection(), "3".to_string())
        .unwrap();
    assert!(!listing.available);
    assert_eq!(listing.status, ListingStatus::Open);
}
