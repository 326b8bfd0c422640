use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint64};
use cw_storage_plus::Bound;

use crate::helpers::ensure_not_empty;
use crate::registry::denom::{ensure_denom_exists, get_denom};
use crate::registry::page_size;
use crate::state::{tokens, Token, SUPPLY};
use crate::ContractError;

/// Fields of a token that its owner may change after minting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub uri: String,
    pub data: String,
}

/// Mints a new token into `denom_id`. Only the creator of the denom
/// may mint into it.
pub fn mint_nft(
    storage: &mut dyn Storage,
    denom_id: &str,
    token_id: &str,
    metadata: TokenMetadata,
    owner: Addr,
    minter: &Addr,
) -> Result<Token, ContractError> {
    let denom = get_denom(storage, denom_id)?;
    if denom.creator != *minter {
        return Err(ContractError::Unauthorized {});
    }
    if has_token(storage, denom_id, token_id) {
        return Err(ContractError::TokenAlreadyExists {
            denom_id: denom_id.to_string(),
            token_id: token_id.to_string(),
        });
    }
    ensure_not_empty("token id", token_id)?;
    let supply =
        Uint64::new(get_total_supply(storage, denom_id)?).checked_add(Uint64::new(1))?;

    let token = Token {
        denom_id: denom_id.to_string(),
        token_id: token_id.to_string(),
        name: metadata.name,
        uri: metadata.uri,
        data: metadata.data,
        owner,
        approved_addresses: vec![],
    };
    tokens().save(storage, (denom_id, token_id), &token)?;
    SUPPLY.save(storage, denom_id, &supply.u64())?;

    Ok(token)
}

pub fn get_token(
    storage: &dyn Storage,
    denom_id: &str,
    token_id: &str,
) -> Result<Token, ContractError> {
    tokens()
        .may_load(storage, (denom_id, token_id))?
        .ok_or_else(|| ContractError::token_not_found(denom_id, token_id))
}

pub fn has_token(storage: &dyn Storage, denom_id: &str, token_id: &str) -> bool {
    tokens().has(storage, (denom_id, token_id))
}

/// Loads a token for an update, reporting a missing denom before a
/// missing token.
pub(crate) fn load_existing(
    storage: &dyn Storage,
    denom_id: &str,
    token_id: &str,
) -> Result<Token, ContractError> {
    ensure_denom_exists(storage, denom_id)?;
    get_token(storage, denom_id, token_id)
}

/// Replaces the name, uri and data of a token. Ownership and
/// approvals are left untouched.
pub fn edit_nft(
    storage: &mut dyn Storage,
    denom_id: &str,
    token_id: &str,
    metadata: TokenMetadata,
    editor: &Addr,
) -> Result<Token, ContractError> {
    let mut token = load_existing(storage, denom_id, token_id)?;
    if token.owner != *editor {
        return Err(ContractError::Unauthorized {});
    }

    token.name = metadata.name;
    token.uri = metadata.uri;
    token.data = metadata.data;
    tokens().save(storage, (denom_id, token_id), &token)?;

    Ok(token)
}

/// Destroys a token. Removing the record also drops it from the
/// owner index.
pub fn burn_nft(
    storage: &mut dyn Storage,
    denom_id: &str,
    token_id: &str,
    burner: &Addr,
) -> Result<Token, ContractError> {
    let token = load_existing(storage, denom_id, token_id)?;
    if token.owner != *burner {
        return Err(ContractError::Unauthorized {});
    }
    let supply =
        Uint64::new(get_total_supply(storage, denom_id)?).checked_sub(Uint64::new(1))?;

    tokens().remove(storage, (denom_id, token_id))?;
    SUPPLY.save(storage, denom_id, &supply.u64())?;

    Ok(token)
}

/// Number of live tokens in a denom. Unknown denoms have a supply
/// of zero.
pub fn get_total_supply(storage: &dyn Storage, denom_id: &str) -> StdResult<u64> {
    Ok(SUPPLY.may_load(storage, denom_id)?.unwrap_or_default())
}

/// Lists the tokens held by `owner` in primary key order. Denom ids
/// are length-prefixed in the key, so shorter denom ids sort first;
/// denoms of equal length sort by id, then tokens by token id.
///
/// When `denom_id` is set only tokens of that denom are returned and
/// `start_after` must belong to the same denom.
pub fn list_tokens_by_owner(
    storage: &dyn Storage,
    owner: &Addr,
    denom_id: Option<&str>,
    start_after: Option<(String, String)>,
    limit: Option<u32>,
) -> Result<Vec<Token>, ContractError> {
    if let (Some((after_denom, _)), Some(denom_id)) = (&start_after, denom_id) {
        if after_denom != denom_id {
            return Err(ContractError::invalid_request(format!(
                "start_after denom ({after_denom}) does not match denom filter ({denom_id})"
            )));
        }
    }
    let limit = page_size(limit);
    let min = match (start_after, denom_id) {
        (Some(key), _) => Some(Bound::exclusive(key)),
        // No token id is empty, so this is the first key of the denom.
        (None, Some(denom_id)) => Some(Bound::inclusive((denom_id.to_string(), String::new()))),
        (None, None) => None,
    };

    let nfts = tokens()
        .idx
        .owner
        .prefix(owner.clone())
        .range(storage, min, None, Order::Ascending)
        .map(|item| item.map(|(_, token)| token))
        .take_while(|item| match (item, denom_id) {
            (Ok(token), Some(denom_id)) => token.denom_id == denom_id,
            _ => true,
        })
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(nfts)
}

/// Lists the tokens of a single denom in ascending token id order.
pub fn list_tokens_by_denom(
    storage: &dyn Storage,
    denom_id: &str,
    start_after: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<Token>, ContractError> {
    ensure_denom_exists(storage, denom_id)?;
    let limit = page_size(limit);
    let nfts = tokens()
        .prefix(denom_id)
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(_, token)| token))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(nfts)
}
