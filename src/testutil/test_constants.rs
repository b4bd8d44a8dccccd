/// This address should be used for the contract administrator address in state
pub const DEFAULT_ADMIN_ADDRESS: &str = "admin";
/// The constructor parameter handed to the define_in_constructor variant in the reference
/// deployment scenario
pub const DEFAULT_CONSTRUCTOR_BASE_YEAR: u64 = 2022;
