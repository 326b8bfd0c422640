use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Index, IndexList, IndexedMap, Map, MultiIndex, UniqueIndex};

#[cw_serde]
pub struct Denom {
    pub id: String,
    pub name: String,
    pub schema: String,
    pub creator: Addr,
}

#[cw_serde]
pub struct Token {
    pub denom_id: String,
    pub token_id: String,
    pub name: String,
    pub uri: String,
    pub data: String,
    pub owner: Addr,
    /// Addresses allowed to transfer this token on the owner's
    /// behalf. Kept sorted and free of duplicates, and emptied
    /// whenever the token changes hands.
    pub approved_addresses: Vec<Addr>,
}

impl Token {
    pub fn is_approved(&self, addr: &Addr) -> bool {
        self.approved_addresses.binary_search(addr).is_ok()
    }

    /// Returns false if the address was already approved.
    pub(crate) fn approve(&mut self, addr: Addr) -> bool {
        match self.approved_addresses.binary_search(&addr) {
            Ok(_) => false,
            Err(i) => {
                self.approved_addresses.insert(i, addr);
                true
            }
        }
    }

    /// Returns false if the address was not approved.
    pub(crate) fn revoke(&mut self, addr: &Addr) -> bool {
        match self.approved_addresses.binary_search(addr) {
            Ok(i) => {
                self.approved_addresses.remove(i);
                true
            }
            Err(_) => false,
        }
    }
}

pub struct DenomIndexes<'a> {
    pub name: UniqueIndex<'a, String, Denom, String>,
}

impl<'a> IndexList<Denom> for DenomIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Denom>> + '_> {
        let v: Vec<&dyn Index<Denom>> = vec![&self.name];
        Box::new(v.into_iter())
    }
}

/// Denoms keyed by id, with a unique lookup by name.
pub fn denoms<'a>() -> IndexedMap<'a, &'a str, Denom, DenomIndexes<'a>> {
    let indexes = DenomIndexes {
        name: UniqueIndex::new(|d: &Denom| d.name.clone(), "denoms__name"),
    };
    IndexedMap::new("denoms", indexes)
}

pub struct TokenIndexes<'a> {
    pub owner: MultiIndex<'a, Addr, Token, (String, String)>,
}

impl<'a> IndexList<Token> for TokenIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Token>> + '_> {
        let v: Vec<&dyn Index<Token>> = vec![&self.owner];
        Box::new(v.into_iter())
    }
}

/// Tokens keyed by `(denom_id, token_id)`. The owner index is
/// rewritten by every `save` and `remove`, so it never disagrees
/// with the primary records.
pub fn tokens<'a>() -> IndexedMap<'a, (&'a str, &'a str), Token, TokenIndexes<'a>> {
    let indexes = TokenIndexes {
        owner: MultiIndex::new(
            |_pk: &[u8], t: &Token| t.owner.clone(),
            "tokens",
            "tokens__owner",
        ),
    };
    IndexedMap::new("tokens", indexes)
}

/// Number of live tokens per denom.
pub const SUPPLY: Map<&str, u64> = Map::new("supply");

/// (owner, operator) -> whether the operator may act on all of the
/// owner's tokens.
pub const OPERATORS: Map<(&Addr, &Addr), bool> = Map::new("operators");
