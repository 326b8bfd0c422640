use std::collections::BTreeMap;

use cosmwasm_std::{Addr, Order, StdResult, Storage};

use crate::registry::token::load_existing;
use crate::registry::transfer::{authorize, Authorization};
use crate::state::{tokens, Token, OPERATORS};
use crate::ContractError;

/// Per-token approvals may be managed by the owner or by one of the
/// owner's operators, but not by an address that is itself only
/// approved on the token.
fn ensure_can_manage_approvals(
    storage: &dyn Storage,
    token: &Token,
    sender: &Addr,
) -> Result<(), ContractError> {
    match authorize(storage, token, sender)? {
        Some(Authorization::Owner) | Some(Authorization::OperatorApproval) => Ok(()),
        Some(Authorization::TokenApproval) | None => Err(ContractError::Unauthorized {}),
    }
}

/// Allows `approved` to transfer a single token. Approving an address
/// twice is a no-op.
pub fn add_approval(
    storage: &mut dyn Storage,
    denom_id: &str,
    token_id: &str,
    grantor: &Addr,
    approved: Addr,
) -> Result<Token, ContractError> {
    let mut token = load_existing(storage, denom_id, token_id)?;
    ensure_can_manage_approvals(storage, &token, grantor)?;

    if token.approve(approved) {
        tokens().save(storage, (denom_id, token_id), &token)?;
    }
    Ok(token)
}

/// Withdraws a per-token approval. Revoking an address that was never
/// approved is a no-op.
pub fn revoke_approval(
    storage: &mut dyn Storage,
    denom_id: &str,
    token_id: &str,
    revoker: &Addr,
    approved: &Addr,
) -> Result<Token, ContractError> {
    let mut token = load_existing(storage, denom_id, token_id)?;
    ensure_can_manage_approvals(storage, &token, revoker)?;

    if token.revoke(approved) {
        tokens().save(storage, (denom_id, token_id), &token)?;
    }
    Ok(token)
}

/// Grants or withdraws `operator`'s right to act on every token
/// `owner` holds, now or later.
pub fn set_approval_for_all(
    storage: &mut dyn Storage,
    owner: &Addr,
    operator: &Addr,
    approved: bool,
) -> Result<(), ContractError> {
    if owner == operator {
        return Err(ContractError::invalid_request(
            "an address can not be its own operator",
        ));
    }
    OPERATORS.save(storage, (owner, operator), &approved)?;
    Ok(())
}

pub fn is_approved_for_all(
    storage: &dyn Storage,
    owner: &Addr,
    operator: &Addr,
) -> StdResult<bool> {
    Ok(OPERATORS
        .may_load(storage, (owner, operator))?
        .unwrap_or(false))
}

/// Every operator grant `owner` has made, including withdrawn ones.
pub fn get_approved_addresses(
    storage: &dyn Storage,
    owner: &Addr,
) -> StdResult<BTreeMap<String, bool>> {
    OPERATORS
        .prefix(owner)
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(operator, approved)| (operator.into_string(), approved)))
        .collect()
}
