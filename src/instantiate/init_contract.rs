use crate::core::msg::InitMsg;
use crate::core::state::{save_state, InitStrategy, State};
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::EntryPointResponse;
use crate::util::constants::DEFAULT_BASE_YEAR;
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint64};

/// The main functionality executed when the smart contract is first instantiated.  This builds
/// the internal contract [State](crate::core::state::State) value through whichever storage
/// initialization strategy the init msg selects.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract, selecting the deployed
/// contract variant and carrying its constructor parameters.
pub fn init_contract(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let state = match &msg {
        // The constructor strategy reads its stored values from the deployment parameters
        InitMsg::DefineInConstructor { base_year } => {
            State::new(*base_year, InitStrategy::Constructor, info.sender)
        }
        // The contract-body strategy takes no deployment input and reads its stored values from
        // compile-time initializers
        InitMsg::DefineInContract {} => State::new(
            Uint64::new(DEFAULT_BASE_YEAR),
            InitStrategy::Contract,
            info.sender,
        ),
    };
    // Store the state by grabbing a mutable instance of the contract storage
    save_state(deps.storage, &state)?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::InstantiateContract)
                .set_init_strategy(&state.init_strategy)
                .set_base_year(state.base_year),
        )
        .to_ok()
}
