//! Contains the functionality used in the [contract file](crate::contract) to migrate the contract
//! to a new version.

pub mod migrate_contract;
/// Utilities for reading and writing the contract's stored name and version.
pub mod version_info;
