use cosmwasm_std::{Addr, StdResult, Storage};

use crate::registry::approval::is_approved_for_all;
use crate::registry::token::load_existing;
use crate::state::{tokens, Token};
use crate::ContractError;

/// The grant under which an address may act on a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorization {
    /// The address owns the token.
    Owner,
    /// The address is in the token's approval list.
    TokenApproval,
    /// The owner has made the address an operator for all of its
    /// tokens.
    OperatorApproval,
}

impl Authorization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authorization::Owner => "owner",
            Authorization::TokenApproval => "token_approval",
            Authorization::OperatorApproval => "operator_approval",
        }
    }
}

/// Decides whether `caller` may transfer `token`. Grants are checked
/// in the order owner, token approval, operator approval and the
/// first one that matches is returned. `None` means the caller holds
/// no grant.
pub fn authorize(
    storage: &dyn Storage,
    token: &Token,
    caller: &Addr,
) -> StdResult<Option<Authorization>> {
    if token.owner == *caller {
        return Ok(Some(Authorization::Owner));
    }
    if token.is_approved(caller) {
        return Ok(Some(Authorization::TokenApproval));
    }
    if is_approved_for_all(storage, &token.owner, caller)? {
        return Ok(Some(Authorization::OperatorApproval));
    }
    Ok(None)
}

/// Moves a token from `from` to `to` on behalf of `caller`.
///
/// `from` must be the token's current owner. The token's approvals
/// are cleared; operator grants made by `from` are not touched. The
/// token and its owner index entry are written by a single save.
pub fn transfer_owner(
    storage: &mut dyn Storage,
    denom_id: &str,
    token_id: &str,
    from: &Addr,
    to: Addr,
    caller: &Addr,
) -> Result<(Token, Authorization), ContractError> {
    let mut token = load_existing(storage, denom_id, token_id)?;
    if token.owner != *from {
        return Err(ContractError::Unauthorized {});
    }
    let authorization =
        authorize(storage, &token, caller)?.ok_or(ContractError::Unauthorized {})?;

    token.owner = to;
    token.approved_addresses.clear();
    tokens().save(storage, (denom_id, token_id), &token)?;

    Ok((token, authorization))
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::mock_dependencies;

    use super::*;
    use crate::registry::approval::{add_approval, set_approval_for_all};
    use crate::registry::denom::issue_denom;
    use crate::registry::token::{
        get_token, get_total_supply, list_tokens_by_owner, mint_nft, TokenMetadata,
    };

    fn mint(storage: &mut dyn Storage, token_id: &str, owner: &Addr) {
        mint_nft(
            storage,
            "d1",
            token_id,
            TokenMetadata::default(),
            owner.clone(),
            &Addr::unchecked("alice"),
        )
        .unwrap();
    }

    fn owned(storage: &dyn Storage, owner: &Addr) -> Vec<String> {
        list_tokens_by_owner(storage, owner, None, None, None)
            .unwrap()
            .into_iter()
            .map(|t| t.token_id)
            .collect()
    }

    #[test]
    fn test_authorize_order() {
        let mut deps = mock_dependencies();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");
        let carol = Addr::unchecked("carol");
        let dave = Addr::unchecked("dave");
        issue_denom(deps.as_mut().storage, "d1", "coolcats", "", &alice).unwrap();
        mint(deps.as_mut().storage, "t1", &bob);

        // Carol is both approved on the token and an operator. The
        // token approval is found first.
        add_approval(deps.as_mut().storage, "d1", "t1", &bob, carol.clone()).unwrap();
        set_approval_for_all(deps.as_mut().storage, &bob, &carol, true).unwrap();
        set_approval_for_all(deps.as_mut().storage, &bob, &dave, true).unwrap();

        let token = get_token(deps.as_ref().storage, "d1", "t1").unwrap();
        let storage = deps.as_ref().storage;
        assert_eq!(authorize(storage, &token, &bob).unwrap(), Some(Authorization::Owner));
        assert_eq!(
            authorize(storage, &token, &carol).unwrap(),
            Some(Authorization::TokenApproval)
        );
        assert_eq!(
            authorize(storage, &token, &dave).unwrap(),
            Some(Authorization::OperatorApproval)
        );
        assert_eq!(authorize(storage, &token, &alice).unwrap(), None);
    }

    #[test]
    fn test_transfer_checks() {
        let mut deps = mock_dependencies();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");
        let carol = Addr::unchecked("carol");
        let dave = Addr::unchecked("dave");

        assert_eq!(
            transfer_owner(deps.as_mut().storage, "d1", "t1", &bob, carol.clone(), &bob)
                .unwrap_err(),
            ContractError::denom_not_found("d1")
        );
        issue_denom(deps.as_mut().storage, "d1", "coolcats", "", &alice).unwrap();
        assert_eq!(
            transfer_owner(deps.as_mut().storage, "d1", "t1", &bob, carol.clone(), &bob)
                .unwrap_err(),
            ContractError::token_not_found("d1", "t1")
        );
        mint(deps.as_mut().storage, "t1", &bob);

        // Wrong source owner, even when the caller is the real owner.
        assert_eq!(
            transfer_owner(deps.as_mut().storage, "d1", "t1", &dave, carol.clone(), &bob)
                .unwrap_err(),
            ContractError::Unauthorized {}
        );
        // No grant.
        assert_eq!(
            transfer_owner(deps.as_mut().storage, "d1", "t1", &bob, carol.clone(), &dave)
                .unwrap_err(),
            ContractError::Unauthorized {}
        );
        assert_eq!(get_token(deps.as_ref().storage, "d1", "t1").unwrap().owner, bob);

        add_approval(deps.as_mut().storage, "d1", "t1", &bob, dave.clone()).unwrap();
        let (token, authorization) =
            transfer_owner(deps.as_mut().storage, "d1", "t1", &bob, carol.clone(), &dave)
                .unwrap();
        assert_eq!(authorization, Authorization::TokenApproval);
        assert_eq!(token.owner, carol);
        assert!(token.approved_addresses.is_empty());
        assert_eq!(get_token(deps.as_ref().storage, "d1", "t1").unwrap(), token);
        assert_eq!(get_total_supply(deps.as_ref().storage, "d1").unwrap(), 1);
        assert!(owned(deps.as_ref().storage, &bob).is_empty());
        assert_eq!(owned(deps.as_ref().storage, &carol), vec!["t1"]);

        // Dave's approval did not survive the transfer.
        assert_eq!(
            transfer_owner(deps.as_mut().storage, "d1", "t1", &carol, dave.clone(), &dave)
                .unwrap_err(),
            ContractError::Unauthorized {}
        );
        // Sending to the current owner is allowed and still clears
        // the token's approvals.
        add_approval(deps.as_mut().storage, "d1", "t1", &carol, dave.clone()).unwrap();
        let (token, authorization) =
            transfer_owner(deps.as_mut().storage, "d1", "t1", &carol, carol.clone(), &carol)
                .unwrap();
        assert_eq!(authorization, Authorization::Owner);
        assert_eq!(token.owner, carol);
        assert!(token.approved_addresses.is_empty());
        assert_eq!(get_token(deps.as_ref().storage, "d1", "t1").unwrap(), token);
        assert_eq!(owned(deps.as_ref().storage, &carol), vec!["t1"]);
    }

    #[test]
    fn test_operator_grant_survives_transfers() {
        let mut deps = mock_dependencies();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");
        let carol = Addr::unchecked("carol");
        let dave = Addr::unchecked("dave");
        issue_denom(deps.as_mut().storage, "d1", "coolcats", "", &alice).unwrap();
        mint(deps.as_mut().storage, "t1", &bob);
        mint(deps.as_mut().storage, "t2", &bob);

        set_approval_for_all(deps.as_mut().storage, &bob, &dave, true).unwrap();

        let (_, authorization) =
            transfer_owner(deps.as_mut().storage, "d1", "t1", &bob, carol.clone(), &dave)
                .unwrap();
        assert_eq!(authorization, Authorization::OperatorApproval);

        // Still an operator for bob's remaining token.
        transfer_owner(deps.as_mut().storage, "d1", "t2", &bob, carol.clone(), &dave).unwrap();
        assert_eq!(owned(deps.as_ref().storage, &carol), vec!["t1", "t2"]);

        // But not for carol's.
        assert_eq!(
            transfer_owner(deps.as_mut().storage, "d1", "t1", &carol, bob.clone(), &dave)
                .unwrap_err(),
            ContractError::Unauthorized {}
        );
    }

    #[test]
    fn test_swap_is_two_transfers() {
        let mut deps = mock_dependencies();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");
        let carol = Addr::unchecked("carol");
        issue_denom(deps.as_mut().storage, "d1", "coolcats", "", &alice).unwrap();
        mint(deps.as_mut().storage, "t1", &bob);

        transfer_owner(deps.as_mut().storage, "d1", "t1", &bob, carol.clone(), &bob).unwrap();
        transfer_owner(deps.as_mut().storage, "d1", "t1", &carol, bob.clone(), &carol).unwrap();

        assert_eq!(owned(deps.as_ref().storage, &bob), vec!["t1"]);
        assert!(owned(deps.as_ref().storage, &carol).is_empty());
    }
}
