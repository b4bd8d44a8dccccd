//! Shared helpers for exercising contract deployments in tests.  Only compiled for tests or when
//! the enable-test-utils feature is active.

pub mod test_constants;
pub mod test_utilities;
