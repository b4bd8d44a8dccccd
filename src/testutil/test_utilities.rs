use cosmwasm_std::testing::{mock_env, mock_info};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint64};

use crate::contract::instantiate;
use crate::core::msg::InitMsg;
use crate::util::aliases::EntryPointResponse;

use super::test_constants::{DEFAULT_ADMIN_ADDRESS, DEFAULT_CONSTRUCTOR_BASE_YEAR};

/// The full set of inputs for a test deployment: the variant-selecting init msg is the "contract
/// name plus constructor arguments" pairing, and the env/info describe the deployment transaction.
pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub msg: InitMsg,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            msg: InitMsg::DefineInConstructor {
                base_year: Uint64::new(DEFAULT_CONSTRUCTOR_BASE_YEAR),
            },
        }
    }
}
impl InstArgs {
    /// Deployment arguments for the constructor-assignment variant with the given parameter.
    pub fn define_in_constructor<U: Into<Uint64>>(base_year: U) -> Self {
        InstArgs {
            msg: InitMsg::DefineInConstructor {
                base_year: base_year.into(),
            },
            ..Default::default()
        }
    }

    /// Deployment arguments for the contract-body variant, which takes no constructor parameters.
    pub fn define_in_contract() -> Self {
        InstArgs {
            msg: InitMsg::DefineInContract {},
            ..Default::default()
        }
    }
}

/// Submits a deployment with the given arguments.  Any error produced by the underlying
/// framework propagates to the caller unaltered.
pub fn test_instantiate(deps: DepsMut, args: InstArgs) -> EntryPointResponse {
    instantiate(deps, args.env, args.info, args.msg)
}

/// Submits a deployment that is required to succeed, returning the confirmed response handle.
pub fn test_instantiate_success(deps: DepsMut, args: InstArgs) -> Response {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn single_attribute_for_key<'a>(response: &'a Response, key: &str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
