// Shared test utilities
pub mod common;
