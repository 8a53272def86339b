//! Domain layer for TaskForge
//!
//! This crate contains the task records kept by the server, the board
//! records kept by the client, and the pure transitions between board
//! states. Nothing in here performs I/O.

pub mod board;
pub mod task;
pub mod timestamp;

pub use timestamp::Timestamp;
