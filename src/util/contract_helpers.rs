use crate::core::error::ContractError;
use crate::util::aliases::GasGolfResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::MessageInfo;

/// Ensures that the info provided to the route does not include any funds.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use gas_golf_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("deployer", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> GasGolfResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::check_funds_are_empty;
    use crate::core::error::ContractError;
    use crate::testutil::test_utilities::empty_mock_info;
    use cosmwasm_std::coin;
    use cosmwasm_std::testing::mock_info;

    #[test]
    fn test_funds_check_accepts_empty_funds() {
        check_funds_are_empty(&empty_mock_info("deployer"))
            .expect("an info without funds should pass the check");
    }

    #[test]
    fn test_funds_check_rejects_provided_funds() {
        let error = check_funds_are_empty(&mock_info("deployer", &[coin(100, "uatom")]))
            .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "the responding error should indicate invalid funds, but got: {:?}",
            error,
        );
    }
}
