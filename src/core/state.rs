use crate::util::aliases::GasGolfResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{Addr, Storage, Uint64};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub const STATE: Item<State> = Item::new("contract_state");

/// Records which storage initialization strategy produced the contract's stored values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InitStrategy {
    /// Values were assigned from constructor parameters during instantiation.
    Constructor,
    /// Values were assigned from initializers baked into the contract body.
    Contract,
}
impl Display for InitStrategy {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            InitStrategy::Constructor => write!(f, "constructor"),
            InitStrategy::Contract => write!(f, "contract"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    pub base_year: Uint64,
    pub init_strategy: InitStrategy,
    pub admin: Addr,
}
impl State {
    pub fn new(base_year: Uint64, init_strategy: InitStrategy, admin: Addr) -> State {
        State {
            base_year,
            init_strategy,
            admin,
        }
    }
}

pub fn save_state(storage: &mut dyn Storage, state: &State) -> GasGolfResult<()> {
    STATE.save(storage, state)?;
    Ok(())
}

pub fn load_state(storage: &dyn Storage) -> GasGolfResult<State> {
    STATE.load(storage)?.to_ok()
}
