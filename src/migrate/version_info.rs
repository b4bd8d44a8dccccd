use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use semver::Version;

use crate::util::aliases::GasGolfResult;
use crate::util::traits::ResultExtensions;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overwrites the stored version info with the name and version compiled into the contract,
/// returning the newly-stored values.
pub fn migrate_version_info(storage: &mut dyn Storage) -> GasGolfResult<ContractVersion> {
    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    get_version_info(storage)
}

pub fn get_version_info(storage: &dyn Storage) -> GasGolfResult<ContractVersion> {
    get_contract_version(storage)?.to_ok()
}

pub fn set_version_info(
    storage: &mut dyn Storage,
    version_info: &ContractVersion,
) -> GasGolfResult<()> {
    set_contract_version(storage, &version_info.contract, &version_info.version)?;
    Ok(())
}

/// Parses the stored version string as a semver for migration comparisons.
pub fn parse_sem_ver(version_info: &ContractVersion) -> GasGolfResult<Version> {
    version_info.version.parse::<Version>()?.to_ok()
}
