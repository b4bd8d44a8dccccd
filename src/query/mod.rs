//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod query_state;
pub mod query_version;
