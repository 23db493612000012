//! engine_api: boundary types and host capability seams.
//!
//! The controller crates never talk to an engine directly; the host
//! implements the traits in `hooks` and exchanges the plain types in
//! `components`. Kept in its own crate to avoid a tight coupling between
//! controller logic and any particular runtime.

pub mod components;
pub mod hooks;
