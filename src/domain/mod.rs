//! Domain modules organized as vertical slices, one per remote service.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types handed to callers
//! - `wire.rs`: Raw serde structs matching request bodies and responses
//! - `convert.rs`: `TryFrom`/`From` conversions and status checks
//! - `client.rs`: The client with one method per remote operation

pub mod daemon;
pub mod service;
pub mod wallet;
