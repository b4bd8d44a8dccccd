use cosmwasm_std::{to_json_binary, Binary, Deps};

use crate::core::state::load_state;
use crate::util::aliases::GasGolfResult;
use crate::util::traits::ResultExtensions;

/// A query that directly returns the contract's stored [State](crate::core::state::State) value.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_state(deps: &Deps) -> GasGolfResult<Binary> {
    let state = load_state(deps.storage)?;
    to_json_binary(&state)?.to_ok()
}
