//! Workflow layer for TaskForge
//!
//! Defines the ports the outer layers implement (task store, key-value
//! storage), the error taxonomy shared by the server, and the
//! [`ledger::TaskLedger`] through which every server-side task operation
//! runs.

pub mod errors;
pub mod ledger;
pub mod ports;
