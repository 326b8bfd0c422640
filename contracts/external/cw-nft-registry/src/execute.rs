use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::registry::{approval, denom, token, token::TokenMetadata, transfer};

pub fn issue_denom(
    deps: DepsMut,
    info: MessageInfo,
    id: String,
    name: String,
    schema: String,
) -> Result<Response, ContractError> {
    let denom = denom::issue_denom(deps.storage, &id, &name, &schema, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "issue_denom")
        .add_attribute("denom_id", denom.id)
        .add_attribute("denom_name", denom.name)
        .add_attribute("creator", denom.creator))
}

pub fn mint_nft(
    deps: DepsMut,
    info: MessageInfo,
    denom_id: String,
    token_id: String,
    metadata: TokenMetadata,
    owner: String,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let token = token::mint_nft(
        deps.storage,
        &denom_id,
        &token_id,
        metadata,
        owner,
        &info.sender,
    )?;

    Ok(Response::new()
        .add_attribute("action", "mint_nft")
        .add_attribute("denom_id", token.denom_id)
        .add_attribute("token_id", token.token_id)
        .add_attribute("uri", token.uri)
        .add_attribute("owner", token.owner)
        .add_attribute("sender", info.sender))
}

pub fn edit_nft(
    deps: DepsMut,
    info: MessageInfo,
    denom_id: String,
    token_id: String,
    metadata: TokenMetadata,
) -> Result<Response, ContractError> {
    let token = token::edit_nft(deps.storage, &denom_id, &token_id, metadata, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "edit_nft")
        .add_attribute("denom_id", token.denom_id)
        .add_attribute("token_id", token.token_id)
        .add_attribute("uri", token.uri)
        .add_attribute("sender", info.sender))
}

pub fn transfer_nft(
    deps: DepsMut,
    info: MessageInfo,
    denom_id: String,
    token_id: String,
    from: String,
    to: String,
) -> Result<Response, ContractError> {
    let from = deps.api.addr_validate(&from)?;
    let to = deps.api.addr_validate(&to)?;
    let (token, authorization) =
        transfer::transfer_owner(deps.storage, &denom_id, &token_id, &from, to, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("denom_id", token.denom_id)
        .add_attribute("token_id", token.token_id)
        .add_attribute("from", from)
        .add_attribute("to", token.owner)
        .add_attribute("sender", info.sender)
        .add_attribute("authorization", authorization.as_str()))
}

pub fn approve(
    deps: DepsMut,
    info: MessageInfo,
    denom_id: String,
    token_id: String,
    address: String,
) -> Result<Response, ContractError> {
    let approved = deps.api.addr_validate(&address)?;
    approval::add_approval(deps.storage, &denom_id, &token_id, &info.sender, approved)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("denom_id", denom_id)
        .add_attribute("token_id", token_id)
        .add_attribute("approved", address)
        .add_attribute("sender", info.sender))
}

pub fn revoke_approval(
    deps: DepsMut,
    info: MessageInfo,
    denom_id: String,
    token_id: String,
    address: String,
) -> Result<Response, ContractError> {
    let revoked = deps.api.addr_validate(&address)?;
    approval::revoke_approval(deps.storage, &denom_id, &token_id, &info.sender, &revoked)?;

    Ok(Response::new()
        .add_attribute("action", "revoke_approval")
        .add_attribute("denom_id", denom_id)
        .add_attribute("token_id", token_id)
        .add_attribute("revoked", address)
        .add_attribute("sender", info.sender))
}

pub fn approve_all(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    let operator = deps.api.addr_validate(&operator)?;
    approval::set_approval_for_all(deps.storage, &info.sender, &operator, approved)?;

    Ok(Response::new()
        .add_attribute("action", "approve_all")
        .add_attribute("owner", info.sender)
        .add_attribute("operator", operator)
        .add_attribute("approved", approved.to_string()))
}

pub fn burn_nft(
    deps: DepsMut,
    info: MessageInfo,
    denom_id: String,
    token_id: String,
) -> Result<Response, ContractError> {
    let token = token::burn_nft(deps.storage, &denom_id, &token_id, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "burn_nft")
        .add_attribute("denom_id", token.denom_id)
        .add_attribute("token_id", token.token_id)
        .add_attribute("sender", info.sender))
}
