use crate::ContractError;

/// Ids and denom names may hold any string except the empty one.
pub(crate) fn ensure_not_empty(field: &str, value: &str) -> Result<(), ContractError> {
    if value.is_empty() {
        return Err(ContractError::invalid_request(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_not_empty() {
        ensure_not_empty("denom id", "d1").unwrap();
        ensure_not_empty("denom id", "CoolCats").unwrap();
        ensure_not_empty("token id", "has space").unwrap();

        assert_eq!(
            ensure_not_empty("token id", "").unwrap_err(),
            ContractError::InvalidRequest {
                reason: "token id must not be empty".to_string()
            }
        );
    }
}
