//! Kanban board client for TaskForge
//!
//! A synchronous, single-user board kept in a key-value storage. The
//! [`orchestrator::Board`] owns the task list and applies every change,
//! [`render`] turns the list into HTML columns, and
//! [`interaction::Interaction`] turns user gestures into intents.

pub mod app;
pub mod interaction;
pub mod orchestrator;
pub mod render;
pub mod storage;
