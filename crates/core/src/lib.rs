//! Backline Core - Shared types library.
//!
//! This crate provides common types used across all Backline components:
//! - `api` - REST backend in front of the hosted data service
//! - `admin` - Admin panel SPA engine
//! - `cli` - Command-line management tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure domain rules - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses
//! - [`records`] - Wire-shaped entity records for the shop's tables

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod records;
pub mod types;

pub use records::*;
pub use types::*;
