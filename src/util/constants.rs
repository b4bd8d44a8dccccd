// Execution output attributes.  All should be prefixed with "gas_golf_" to make them easy to
// discern when observed in the event stream

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const GAS_GOLF_EVENT_TYPE_KEY: &str = "gas_golf_event_type";
/// Value = The storage initialization strategy used by the deployed contract variant (String)
pub const INIT_STRATEGY_KEY: &str = "gas_golf_init_strategy";
/// Value = The base year held in contract storage after instantiation (String)
pub const BASE_YEAR_KEY: &str = "gas_golf_base_year";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "gas_golf_new_value";

//////////////////////
// Global Constants //
//////////////////////

/// The contract-body initializer.  The define_in_contract variant assigns this value to storage
/// instead of reading a constructor parameter, which is what the gas comparison is golfing against
pub const DEFAULT_BASE_YEAR: u64 = 2022;
