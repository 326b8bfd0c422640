#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::registry::token::TokenMetadata;
use crate::{execute, queries};

pub(crate) const CONTRACT_NAME: &str = "crates.io:cw-nft-registry";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("creator", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::IssueDenom { id, name, schema } => {
            execute::issue_denom(deps, info, id, name, schema)
        }
        ExecuteMsg::MintNft {
            denom_id,
            token_id,
            name,
            uri,
            data,
            owner,
        } => execute::mint_nft(
            deps,
            info,
            denom_id,
            token_id,
            TokenMetadata { name, uri, data },
            owner,
        ),
        ExecuteMsg::EditNft {
            denom_id,
            token_id,
            name,
            uri,
            data,
        } => execute::edit_nft(
            deps,
            info,
            denom_id,
            token_id,
            TokenMetadata { name, uri, data },
        ),
        ExecuteMsg::TransferNft {
            denom_id,
            token_id,
            from,
            to,
        } => execute::transfer_nft(deps, info, denom_id, token_id, from, to),
        ExecuteMsg::Approve {
            denom_id,
            token_id,
            address,
        } => execute::approve(deps, info, denom_id, token_id, address),
        ExecuteMsg::RevokeApproval {
            denom_id,
            token_id,
            address,
        } => execute::revoke_approval(deps, info, denom_id, token_id, address),
        ExecuteMsg::ApproveAll { operator, approved } => {
            execute::approve_all(deps, info, operator, approved)
        }
        ExecuteMsg::BurnNft { denom_id, token_id } => {
            execute::burn_nft(deps, info, denom_id, token_id)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let res = match msg {
        QueryMsg::Denom { denom_id } => to_json_binary(&queries::query_denom(deps, denom_id)?),
        QueryMsg::DenomByName { name } => {
            to_json_binary(&queries::query_denom_by_name(deps, name)?)
        }
        QueryMsg::Denoms { start_after, limit } => {
            to_json_binary(&queries::query_denoms(deps, start_after, limit)?)
        }
        QueryMsg::Nft { denom_id, token_id } => {
            to_json_binary(&queries::query_nft(deps, denom_id, token_id)?)
        }
        QueryMsg::HasNft { denom_id, token_id } => {
            to_json_binary(&queries::query_has_nft(deps, denom_id, token_id))
        }
        QueryMsg::Supply { denom_id } => to_json_binary(&queries::query_supply(deps, denom_id)?),
        QueryMsg::Owner {
            owner,
            denom_id,
            start_after,
            limit,
        } => to_json_binary(&queries::query_owner(
            deps,
            owner,
            denom_id,
            start_after,
            limit,
        )?),
        QueryMsg::Collection {
            denom_id,
            start_after,
            limit,
        } => to_json_binary(&queries::query_collection(
            deps,
            denom_id,
            start_after,
            limit,
        )?),
        QueryMsg::ApprovedForAll { owner } => {
            to_json_binary(&queries::query_approved_for_all(deps, owner)?)
        }
        QueryMsg::IsApprovedForAll { owner, operator } => {
            to_json_binary(&queries::query_is_approved_for_all(deps, owner, operator)?)
        }
        QueryMsg::Info {} => to_json_binary(&queries::query_info(deps)?),
    }?;
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
