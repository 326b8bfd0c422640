//! Storage-level operations on denoms, tokens and approvals.
//!
//! Every function here takes the store it works on as an argument and
//! holds no state of its own. Mutating functions finish all of their
//! checks before the first write, so a returned error never leaves a
//! partial update behind.

pub mod approval;
pub mod denom;
pub mod token;
pub mod transfer;

// Default settings for pagination
pub const MAX_LIMIT: u32 = 30;
pub const DEFAULT_LIMIT: u32 = 10;

pub(crate) fn page_size(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}
