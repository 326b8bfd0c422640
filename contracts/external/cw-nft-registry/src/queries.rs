use cosmwasm_std::{Deps, StdResult};
use cw2::{get_contract_version, ContractVersion};

use crate::error::ContractError;
use crate::msg::{ApprovedForAllResponse, CollectionResponse, NftKey, SupplyResponse};
use crate::registry::{approval, denom, token};
use crate::state::{Denom, Token};

pub fn query_denom(deps: Deps, denom_id: String) -> Result<Denom, ContractError> {
    denom::get_denom(deps.storage, &denom_id)
}

pub fn query_denom_by_name(deps: Deps, name: String) -> Result<Denom, ContractError> {
    denom::get_denom_by_name(deps.storage, &name)
}

pub fn query_denoms(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<Denom>> {
    denom::list_denoms(deps.storage, start_after.as_deref(), limit)
}

pub fn query_nft(deps: Deps, denom_id: String, token_id: String) -> Result<Token, ContractError> {
    token::get_token(deps.storage, &denom_id, &token_id)
}

pub fn query_has_nft(deps: Deps, denom_id: String, token_id: String) -> bool {
    token::has_token(deps.storage, &denom_id, &token_id)
}

pub fn query_supply(deps: Deps, denom_id: String) -> StdResult<SupplyResponse> {
    let amount = token::get_total_supply(deps.storage, &denom_id)?;
    Ok(SupplyResponse { denom_id, amount })
}

pub fn query_owner(
    deps: Deps,
    owner: String,
    denom_id: Option<String>,
    start_after: Option<NftKey>,
    limit: Option<u32>,
) -> Result<Vec<Token>, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    token::list_tokens_by_owner(
        deps.storage,
        &owner,
        denom_id.as_deref(),
        start_after.map(|key| (key.denom_id, key.token_id)),
        limit,
    )
}

pub fn query_collection(
    deps: Deps,
    denom_id: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<CollectionResponse, ContractError> {
    let denom = denom::get_denom(deps.storage, &denom_id)?;
    let nfts = token::list_tokens_by_denom(deps.storage, &denom_id, start_after.as_deref(), limit)?;
    Ok(CollectionResponse { denom, nfts })
}

pub fn query_approved_for_all(deps: Deps, owner: String) -> StdResult<ApprovedForAllResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let operators = approval::get_approved_addresses(deps.storage, &owner)?;
    Ok(ApprovedForAllResponse { operators })
}

pub fn query_is_approved_for_all(deps: Deps, owner: String, operator: String) -> StdResult<bool> {
    let owner = deps.api.addr_validate(&owner)?;
    let operator = deps.api.addr_validate(&operator)?;
    approval::is_approved_for_all(deps.storage, &owner, &operator)
}

pub fn query_info(deps: Deps) -> StdResult<ContractVersion> {
    get_contract_version(deps.storage)
}
