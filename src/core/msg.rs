use cosmwasm_std::Uint64;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The contract factory surface: each variant names one of the deployable gas golf contract
/// bodies, and its fields are that variant's ordered constructor parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InitMsg {
    /// Assigns contract storage from the constructor parameters provided at deployment time.
    DefineInConstructor { base_year: Uint64 },
    /// Takes no constructor parameters.  Contract storage is assigned from values baked into
    /// the contract body.
    DefineInContract {},
}
impl InitMsg {
    /// The name under which the selected contract variant deploys.
    pub fn contract_name(&self) -> &'static str {
        match self {
            InitMsg::DefineInConstructor { .. } => "DefineInConstructor",
            InitMsg::DefineInContract {} => "DefineInContract",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
