use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::helpers::ensure_not_empty;
use crate::registry::page_size;
use crate::state::{denoms, Denom};
use crate::ContractError;

/// Registers a new denom. Both the id and the name must be unused.
pub fn issue_denom(
    storage: &mut dyn Storage,
    id: &str,
    name: &str,
    schema: &str,
    creator: &Addr,
) -> Result<Denom, ContractError> {
    let denoms = denoms();
    if denoms.has(storage, id) {
        return Err(ContractError::DuplicateDenomId {
            denom_id: id.to_string(),
        });
    }
    if denoms.idx.name.item(storage, name.to_string())?.is_some() {
        return Err(ContractError::DuplicateDenomName {
            name: name.to_string(),
        });
    }
    ensure_not_empty("denom id", id)?;
    ensure_not_empty("denom name", name)?;

    let denom = Denom {
        id: id.to_string(),
        name: name.to_string(),
        schema: schema.to_string(),
        creator: creator.clone(),
    };
    denoms.save(storage, id, &denom)?;

    Ok(denom)
}

pub fn get_denom(storage: &dyn Storage, id: &str) -> Result<Denom, ContractError> {
    denoms()
        .may_load(storage, id)?
        .ok_or_else(|| ContractError::denom_not_found(id))
}

pub fn get_denom_by_name(storage: &dyn Storage, name: &str) -> Result<Denom, ContractError> {
    match denoms().idx.name.item(storage, name.to_string())? {
        Some((_, denom)) => Ok(denom),
        None => Err(ContractError::DenomNameNotFound {
            name: name.to_string(),
        }),
    }
}

pub fn has_denom(storage: &dyn Storage, id: &str) -> bool {
    denoms().has(storage, id)
}

pub(crate) fn ensure_denom_exists(storage: &dyn Storage, id: &str) -> Result<(), ContractError> {
    if !has_denom(storage, id) {
        return Err(ContractError::denom_not_found(id));
    }
    Ok(())
}

/// Lists denoms in ascending id order. Pass the last id of a page as
/// `start_after` to fetch the next one.
pub fn list_denoms(
    storage: &dyn Storage,
    start_after: Option<&str>,
    limit: Option<u32>,
) -> StdResult<Vec<Denom>> {
    let limit = page_size(limit);
    denoms()
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(_, denom)| denom))
        .collect()
}
