//! Adapters - Implementations of port interfaces.

pub mod http;
pub mod memory;
pub mod postgres;
