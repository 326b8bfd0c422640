use std::collections::BTreeMap;

use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers a new denom. The sender becomes its creator and the
    /// only address allowed to mint into it.
    IssueDenom {
        id: String,
        name: String,
        schema: String,
    },
    /// Mints a token into a denom created by the sender.
    MintNft {
        denom_id: String,
        token_id: String,
        name: String,
        uri: String,
        data: String,
        owner: String,
    },
    /// Replaces the name, uri and data of a token owned by the sender.
    EditNft {
        denom_id: String,
        token_id: String,
        name: String,
        uri: String,
        data: String,
    },
    /// Transfers a token owned by `from` to `to`. The sender must be
    /// `from`, be approved on the token, or be an operator of `from`.
    TransferNft {
        denom_id: String,
        token_id: String,
        from: String,
        to: String,
    },
    /// Allows `address` to transfer a single token. Callable by the
    /// owner of the token or one of its operators.
    Approve {
        denom_id: String,
        token_id: String,
        address: String,
    },
    RevokeApproval {
        denom_id: String,
        token_id: String,
        address: String,
    },
    /// Grants or withdraws `operator`'s right to transfer every token
    /// the sender owns.
    ApproveAll { operator: String, approved: bool },
    /// Destroys a token owned by the sender.
    BurnNft { denom_id: String, token_id: String },
}

#[cw_serde]
pub struct NftKey {
    pub denom_id: String,
    pub token_id: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Denom)]
    Denom { denom_id: String },
    #[returns(crate::state::Denom)]
    DenomByName { name: String },
    /// Lists denoms in ascending id order.
    #[returns(Vec<crate::state::Denom>)]
    Denoms {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(crate::state::Token)]
    Nft { denom_id: String, token_id: String },
    #[returns(bool)]
    HasNft { denom_id: String, token_id: String },
    /// Number of live tokens in a denom. Zero for unknown denoms.
    #[returns(SupplyResponse)]
    Supply { denom_id: String },
    /// Lists the tokens held by `owner`, optionally restricted to one
    /// denom.
    #[returns(Vec<crate::state::Token>)]
    Owner {
        owner: String,
        denom_id: Option<String>,
        start_after: Option<NftKey>,
        limit: Option<u32>,
    },
    /// Returns a denom together with a page of its tokens.
    #[returns(CollectionResponse)]
    Collection {
        denom_id: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Every operator grant made by `owner`.
    #[returns(ApprovedForAllResponse)]
    ApprovedForAll { owner: String },
    #[returns(bool)]
    IsApprovedForAll { owner: String, operator: String },
    #[returns(cw2::ContractVersion)]
    Info {},
}

#[cw_serde]
pub struct SupplyResponse {
    pub denom_id: String,
    pub amount: u64,
}

#[cw_serde]
pub struct CollectionResponse {
    pub denom: crate::state::Denom,
    pub nfts: Vec<crate::state::Token>,
}

#[cw_serde]
pub struct ApprovedForAllResponse {
    pub operators: BTreeMap<String, bool>,
}

#[cw_serde]
pub struct MigrateMsg {}
