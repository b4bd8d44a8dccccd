//! Contains all types and base functionality used to construct the logic of the contract.

/// Contains each error type emitted by the contract.
pub mod error;
/// Contains each message taken as a request by the contract.
pub mod msg;
/// Contains the core internal storage functionalities for the contract.
pub mod state;
