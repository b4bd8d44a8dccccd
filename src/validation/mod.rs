//! Contains the functionality used in the [contract file](crate::contract) to validate incoming
//! messages before they are processed.

pub mod validate_init_msg;
