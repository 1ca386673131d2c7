//! Command implementations, one module per area of the tool.

pub mod auth;
pub mod customers;
pub mod export;
pub mod logs;
pub mod lookup;
