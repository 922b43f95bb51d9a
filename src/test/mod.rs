// Test utilities shared across unit tests
pub mod utils;
