use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::util::aliases::GasGolfResult;
use crate::util::traits::ResultExtensions;

pub fn validate_init_msg(msg: &InitMsg) -> GasGolfResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    match msg {
        InitMsg::DefineInConstructor { base_year } => {
            if base_year.is_zero() {
                invalid_fields.push("base_year: must not be zero".to_string());
            }
        }
        // No constructor parameters exist to inspect.  The contract body supplies all values
        InitMsg::DefineInContract {} => {}
    }
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
