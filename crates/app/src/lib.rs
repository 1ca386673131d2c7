//! Emporium Rewards application flows.
//!
//! UI-agnostic logic for the loyalty front end: any presentation layer
//! (CLI, web, service) drives these flows and renders their results. Each
//! flow issues one or more HTTP calls via [`emporium_api::ApiClient`] and
//! reports failure as a flow-specific error whose `Display` text is the
//! user-facing message.
//!
//! # Modules
//!
//! - [`session`] - process-wide admin session store and durable token seam
//! - [`guard`] - token validation on entry to the protected area
//! - [`lookup`] - public points lookup by phone number
//! - [`login`] - admin credential exchange
//! - [`search`] - customer search, the edit buffer, and the save diff
//! - [`manage`] - customer create and delete
//! - [`logs`] - audit log fetch and compensating undo
//! - [`export`] - customer data export

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod export;
pub mod guard;
pub mod login;
pub mod logs;
pub mod lookup;
pub mod manage;
pub mod search;
pub mod session;

pub use guard::{GuardError, ensure_admin};
pub use search::{AdjustDirection, EditBuffer, SavePlan, SearchEditFlow, SearchField};
pub use session::{MemoryTokenStore, SessionStore, TokenStore, TokenStoreError};
