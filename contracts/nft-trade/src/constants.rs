//! Contract-wide constants.

use near_sdk::NearToken;

/// Maximum token ID length
pub const MAX_TOKEN_ID_LEN: usize = 256;

/// Maximum media URL length
pub const MAX_MEDIA_URL_LEN: usize = 2048;

/// Maximum listing description length
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Delimiter between collection contract and token ID in the key preimage.
/// ":" is not a valid character in NEAR account IDs, preventing key collisions.
pub const DELIMETER: &str = ":";

/// 1 yocto
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
