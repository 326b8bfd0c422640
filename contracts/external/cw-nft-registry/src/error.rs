use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("denom ({denom_id}) does not exist")]
    DenomNotFound { denom_id: String },

    #[error("no denom is named ({name})")]
    DenomNameNotFound { name: String },

    #[error("denom id ({denom_id}) has already been issued")]
    DuplicateDenomId { denom_id: String },

    #[error("denom name ({name}) has already been issued")]
    DuplicateDenomName { name: String },

    #[error("nft ({token_id}) does not exist in denom ({denom_id})")]
    TokenNotFound { denom_id: String, token_id: String },

    #[error("nft ({token_id}) already exists in denom ({denom_id})")]
    TokenAlreadyExists { denom_id: String, token_id: String },

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
}

impl ContractError {
    pub(crate) fn denom_not_found(denom_id: &str) -> Self {
        ContractError::DenomNotFound {
            denom_id: denom_id.to_string(),
        }
    }

    pub(crate) fn token_not_found(denom_id: &str, token_id: &str) -> Self {
        ContractError::TokenNotFound {
            denom_id: denom_id.to_string(),
            token_id: token_id.to_string(),
        }
    }

    pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
        ContractError::InvalidRequest {
            reason: reason.into(),
        }
    }
}
