//! folderkey - keyword-to-folder navigation core for launcher hosts
//!
//! Resolves a typed query into a directory listing, a saved keyword
//! lookup, or a new keyword registration, and speaks the host's
//! JSON-RPC result protocol.

pub mod errors;
pub mod fsio;
pub mod item;
pub mod output;
pub mod query;
pub mod rpc;
pub mod settings;
