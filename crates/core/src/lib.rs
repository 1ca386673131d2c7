//! Emporium Core - Shared types library.
//!
//! This crate provides common types used across all Emporium Rewards
//! components:
//! - `api` - HTTP client for the remote loyalty API
//! - `app` - Session, auth guard, and customer-management flows
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - IDs, customer records, admin sessions, audit log entries,
//!   and reward eligibility

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
